use crate::database::dao;
use crate::tools::log_error_and_return;
use crate::tools::password::verify_password;
use crate::web::api::{DbPool, get_connection, log_activity};
use crate::web::authentication::SESSION_COOKIE;
use crate::web::notice::{self, Notice, NoticeResponse};
use crate::web::session::AdminSession;
use crate::web::session_storage::SessionStorage;
use dto::activity::ActivityAction;
use dto::admin::{AdminCredentials, AdminProfile};
use rocket::State;
use rocket::http::{Cookie, CookieJar};
use rocket::serde::json::Json;
use rocket::time::Duration;
use std::sync::Mutex;
use uuid::Uuid;

const SESSION_COOKIE_MAX_AGE_IN_HOURS: i64 = 12;

/// Check the credentials against the stored salted digest. On success a new
/// UUID keys the admin's session in the storage and travels back to the
/// caller as a private cookie: that token is their access to everything else.
#[post("/login", format = "application/json", data = "<credentials>")]
pub async fn login(
    pool: &State<DbPool>,
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    credentials: Json<AdminCredentials>,
) -> Result<Json<AdminProfile>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let credentials = credentials.into_inner();

    let admin = dao::admin::find_by_username(&mut connection, credentials.username())
        .map_err(notice::database_error)?;
    let admin = match admin {
        Some(admin) if verify_password(credentials.password(), admin.password_hash()) => admin,
        _ => return Err(notice::unauthorized()),
    };
    let profile = admin.to_profile().map_err(notice::database_error)?;
    let gender = admin.gender().map_err(notice::database_error)?;

    let session = AdminSession::new(
        admin.id(),
        profile.username().clone(),
        profile.first_name().clone(),
        profile.last_name().clone(),
        gender,
    );
    let token = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE.to_owned(), token.clone()))
        .max_age(Duration::hours(SESSION_COOKIE_MAX_AGE_IN_HOURS))
        .build();
    cookie_jar.add_private(cookie);
    {
        let mut session_storage = session_storage
            .lock()
            .map_err(log_error_and_return(notice::internal()))?;
        session_storage.store(token, session);
    }

    log_activity(
        &mut connection,
        ActivityAction::Login,
        &format!("{} logged in", profile.username()),
        None,
    );

    Ok(Json(profile))
}

#[post("/logout")]
pub async fn logout(
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    _session: AdminSession,
) -> Result<Json<Notice>, NoticeResponse> {
    if let Some(cookie) = cookie_jar.get_private(SESSION_COOKIE) {
        let mut session_storage = session_storage
            .lock()
            .map_err(log_error_and_return(notice::internal()))?;
        session_storage.remove(cookie.value());
    }
    cookie_jar.remove_private(Cookie::from(SESSION_COOKIE));

    Ok(Json(Notice::success("Signed out.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::with_temp_database;
    use crate::web::api::server::tests::build_test_rocket;
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use rocket::serde::json::json;
    use rocket::tokio::runtime::Runtime;

    fn provision_admin() {
        let mut connection = crate::database::establish_connection().unwrap();
        crate::database::dao::admin::tests::provision_admin(&mut connection, "admin2");
    }

    #[test]
    fn should_login_with_valid_credentials() {
        with_temp_database(|| {
            Runtime::new().unwrap().block_on(async {
                provision_admin();
                let client = Client::tracked(build_test_rocket()).await.unwrap();

                let response = client
                    .post("/api/login")
                    .header(ContentType::JSON)
                    .body(json!({"username": "admin2", "password": "securepass123"}).to_string())
                    .dispatch()
                    .await;

                assert_eq!(Status::Ok, response.status());
                assert!(response.cookies().get_private(SESSION_COOKIE).is_some());
            })
        })
    }

    #[test]
    fn should_reject_wrong_password() {
        with_temp_database(|| {
            Runtime::new().unwrap().block_on(async {
                provision_admin();
                let client = Client::tracked(build_test_rocket()).await.unwrap();

                let response = client
                    .post("/api/login")
                    .header(ContentType::JSON)
                    .body(json!({"username": "admin2", "password": "wrong"}).to_string())
                    .dispatch()
                    .await;

                assert_eq!(Status::Unauthorized, response.status());
            })
        })
    }

    #[test]
    fn should_reject_unknown_username() {
        with_temp_database(|| {
            Runtime::new().unwrap().block_on(async {
                let client = Client::tracked(build_test_rocket()).await.unwrap();

                let response = client
                    .post("/api/login")
                    .header(ContentType::JSON)
                    .body(json!({"username": "nobody", "password": "whatever"}).to_string())
                    .dispatch()
                    .await;

                assert_eq!(Status::Unauthorized, response.status());
            })
        })
    }
}
