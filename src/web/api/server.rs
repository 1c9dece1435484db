use crate::database;
use crate::gift::{GiftLottery, default_gifts};
use crate::notification;
use crate::notification::sms::SmsClient;
use crate::notification::telegram::TelegramSink;
use crate::tools::log_message_and_return;
use crate::web::api::{
    activity_controller, athletes_controller, attendance_controller, dashboard_controller,
    gift_controller, session_controller,
};
use crate::web::server::Server;
use crate::web::session_storage::SessionStorage;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use std::sync::Mutex;

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ApiServer {
    fn default() -> Self {
        Self::new()
    }
}

impl Server for ApiServer {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let pool = match database::init_db() {
            Ok(pool) => pool,
            Err(error) => {
                error!("{error:#?}");
                panic!("Initialization failed, aborting.");
            }
        };
        let lottery = match GiftLottery::new(default_gifts()) {
            Ok(lottery) => lottery,
            Err(error) => {
                error!("{error:#?}");
                panic!("Initialization failed, aborting.");
            }
        };
        let (queue, receiver) = notification::channel();

        rocket_build
            .manage(pool)
            .manage(Mutex::new(SessionStorage::default()))
            .manage(lottery)
            .manage(queue)
            .attach(AdHoc::on_liftoff("notification worker", move |_| {
                Box::pin(async move {
                    let sms_client = SmsClient::from_env_args()
                        .map_err(log_message_and_return("SMS gateway disabled", ()))
                        .ok();
                    let telegram = TelegramSink::from_env_args()
                        .map_err(log_message_and_return("Telegram sink disabled", ()))
                        .ok();
                    rocket::tokio::spawn(notification::run_worker(receiver, sms_client, telegram));
                })
            }))
    }

    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.mount(
            "/api/",
            routes![
                session_controller::login,
                session_controller::logout,
                athletes_controller::register,
                athletes_controller::list_athletes,
                athletes_controller::get_athlete,
                athletes_controller::update_athlete,
                athletes_controller::renew_athlete,
                athletes_controller::delete_athlete,
                attendance_controller::check_in,
                attendance_controller::check_out,
                attendance_controller::daily,
                attendance_controller::history,
                activity_controller::history,
                gift_controller::list_gifts,
                gift_controller::draw_gift,
                dashboard_controller::dashboard,
            ],
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A fully wired rocket against whatever database the current env args
    /// point to. Pair with `with_temp_database`.
    pub(crate) fn build_test_rocket() -> Rocket<Build> {
        let api_server = ApiServer::new();
        api_server.mount_routes(api_server.initialize_managed_states(rocket::build()))
    }
}
