use crate::activity;
use crate::web::api::{DbPool, get_connection};
use crate::web::notice::{self, Notice, NoticeResponse};
use crate::web::session::AdminSession;
use dto::activity::{ActivityAction, ActivityLogView};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;
use std::str::FromStr;

/// The audit trail, newest first. `text` is an OR'd substring filter over
/// details and resolved athlete names, `action` an exact filter; both
/// optional, combined with AND.
#[get("/activity?<text>&<action>")]
pub async fn history(
    pool: &State<DbPool>,
    _session: AdminSession,
    text: Option<String>,
    action: Option<String>,
) -> Result<Json<Vec<ActivityLogView>>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let action_filter = match action.as_deref() {
        None | Some("") => None,
        Some(value) => Some(ActivityAction::from_str(value).map_err(|error| {
            (Status::UnprocessableEntity, Json(Notice::danger(error)))
        })?),
    };

    let views = activity::query(&mut connection, text.as_deref(), action_filter)
        .map_err(notice::database_error)?;

    Ok(Json(views))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::with_temp_database;
    use crate::web::api::server::tests::build_test_rocket;
    use crate::web::authentication::SESSION_COOKIE;
    use crate::web::session::tests::male_session;
    use crate::web::session_storage::SessionStorage;
    use rocket::http::{ContentType, Cookie};
    use rocket::local::asynchronous::Client;
    use rocket::serde::json::json;
    use rocket::tokio::runtime::Runtime;
    use std::sync::Mutex;

    #[test]
    fn should_list_mutations_and_reject_unknown_action_filter() {
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
                client
                    .post("/api/athletes")
                    .header(ContentType::JSON)
                    .private_cookie(Cookie::new(SESSION_COOKIE, token.clone()))
                    .body(
                        json!({
                            "first_name": "Ali",
                            "last_name": "Rezai",
                            "gender": "male",
                            "phone": "9123456789",
                            "emergency_phone": null,
                            "father_name": null,
                            "birth_date": null,
                            "start_date": null,
                            "original_days": 30
                        })
                        .to_string(),
                    )
                    .dispatch()
                    .await;

                let trail = client
                    .get("/api/activity?action=REGISTRATION")
                    .private_cookie(Cookie::new(SESSION_COOKIE, token.clone()))
                    .dispatch()
                    .await;
                assert_eq!(Status::Ok, trail.status());
                let body = trail.into_string().await.unwrap();
                assert!(body.contains("Registered Ali Rezai"));

                let rejected = client
                    .get("/api/activity?action=CHECKIN")
                    .private_cookie(Cookie::new(SESSION_COOKIE, token))
                    .dispatch()
                    .await;
                assert_eq!(Status::UnprocessableEntity, rejected.status());
            })
        })
    }
}
