use crate::attendance;
use crate::registry;
use crate::web::api::{DbPool, get_connection, now};
use crate::web::notice::{self, NoticeResponse};
use crate::web::session::AdminSession;
use dto::dashboard::DashboardSummary;
use rocket::State;
use rocket::serde::json::Json;

/// The landing numbers for the session's partition: population counts along
/// the two expiry thresholds plus today's attendance aggregate.
#[get("/dashboard")]
pub async fn dashboard(
    pool: &State<DbPool>,
    session: AdminSession,
) -> Result<Json<DashboardSummary>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let summaries = registry::list(&mut connection, session.gender(), now())
        .map_err(notice::registry_error)?;

    let total_athletes = summaries.len() as i64;
    let active = summaries
        .iter()
        .filter(|summary| *summary.status().active())
        .count() as i64;
    let expiring_soon = summaries
        .iter()
        .filter(|summary| summary.status().is_expiring_soon())
        .count() as i64;
    let expiring_within_48h = summaries
        .iter()
        .filter(|summary| summary.status().is_expiring_within_48h())
        .count() as i64;

    let attendance = attendance::daily_report(
        &mut connection,
        session.gender(),
        now().date(),
        now(),
    )
    .map_err(notice::attendance_error)?;

    Ok(Json(DashboardSummary::new(
        total_athletes,
        active,
        expiring_soon,
        expiring_within_48h,
        attendance,
    )))
}

#[cfg(test)]
mod tests {
    use crate::database::with_temp_database;
    use crate::web::api::server::tests::build_test_rocket;
    use crate::web::authentication::SESSION_COOKIE;
    use crate::web::session::tests::male_session;
    use crate::web::session_storage::SessionStorage;
    use rocket::http::{ContentType, Cookie, Status};
    use rocket::local::asynchronous::Client;
    use rocket::serde::json::json;
    use rocket::tokio::runtime::Runtime;
    use std::sync::Mutex;

    #[test]
    fn should_summarize_the_partition() {
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

                let response = client
                    .get("/api/dashboard")
                    .private_cookie(Cookie::new(SESSION_COOKIE, token))
                    .dispatch()
                    .await;

                assert_eq!(Status::Ok, response.status());
                let body = response.into_string().await.unwrap();
                assert!(body.contains("\"total_athletes\":1"));
                assert!(body.contains("\"expiring_soon\":0"));
            })
        })
    }
}
