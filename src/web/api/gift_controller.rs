use crate::gift::GiftLottery;
use crate::web::session::AdminSession;
use dto::gift::{DrawnGift, Gift};
use rocket::State;
use rocket::serde::json::Json;

#[get("/gifts")]
pub async fn list_gifts(
    lottery: &State<GiftLottery>,
    _session: AdminSession,
) -> Json<Vec<Gift>> {
    Json(lottery.gifts().to_vec())
}

#[post("/gifts/draw")]
pub async fn draw_gift(
    lottery: &State<GiftLottery>,
    _session: AdminSession,
) -> Json<DrawnGift> {
    Json(lottery.draw())
}

#[cfg(test)]
mod tests {
    use crate::database::with_temp_database;
    use crate::web::api::server::tests::build_test_rocket;
    use crate::web::authentication::SESSION_COOKIE;
    use crate::web::session::tests::male_session;
    use crate::web::session_storage::SessionStorage;
    use rocket::http::{Cookie, Status};
    use rocket::local::asynchronous::Client;
    use rocket::tokio::runtime::Runtime;
    use std::sync::Mutex;

    #[test]
    fn should_draw_one_of_the_configured_prizes() {
        with_temp_database(|| {
            Runtime::new().unwrap().block_on(async {
                let client = Client::tracked(build_test_rocket()).await.unwrap();
                let token = "e9af5e0f-c441-4bcd-bf22-31cc5b1f2f9e".to_owned();
                client
                    .rocket()
                    .state::<Mutex<SessionStorage>>()
                    .unwrap()
                    .lock()
                    .unwrap()
                    .store(token.clone(), male_session());

                let response = client
                    .post("/api/gifts/draw")
                    .private_cookie(Cookie::new(SESSION_COOKIE, token))
                    .dispatch()
                    .await;

                assert_eq!(Status::Ok, response.status());
                let body = response.into_string().await.unwrap();
                assert!(body.contains("full_display"));
            })
        })
    }
}
