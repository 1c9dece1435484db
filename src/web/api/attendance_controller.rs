use crate::attendance;
use crate::calendar;
use crate::registry;
use crate::web::api::{DbPool, get_connection, log_activity, now};
use crate::web::notice::{self, Notice, NoticeResponse};
use crate::web::session::AdminSession;
use dto::activity::ActivityAction;
use dto::attendance::AttendanceRecord;
use dto::daily_report::DailyAttendanceReport;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

#[post("/attendance/<athlete_id>/check-in")]
pub async fn check_in(
    pool: &State<DbPool>,
    session: AdminSession,
    athlete_id: i32,
) -> Result<Json<AttendanceRecord>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    registry::find(&mut connection, athlete_id, session.gender(), now())
        .map_err(notice::registry_error)?;

    let record = attendance::check_in(&mut connection, athlete_id, now())
        .map_err(notice::attendance_error)?;
    log_activity(
        &mut connection,
        ActivityAction::CheckIn,
        &format!("Athlete {athlete_id} checked in"),
        Some(athlete_id),
    );

    Ok(Json(record))
}

#[post("/attendance/<athlete_id>/check-out")]
pub async fn check_out(
    pool: &State<DbPool>,
    session: AdminSession,
    athlete_id: i32,
) -> Result<Json<AttendanceRecord>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    registry::find(&mut connection, athlete_id, session.gender(), now())
        .map_err(notice::registry_error)?;

    let record = attendance::check_out(&mut connection, athlete_id, now())
        .map_err(notice::attendance_error)?;
    let duration = record
        .duration()
        .map(|duration| duration.to_string())
        .unwrap_or_default();
    log_activity(
        &mut connection,
        ActivityAction::CheckOut,
        &format!("Athlete {athlete_id} checked out after {duration}"),
        Some(athlete_id),
    );

    Ok(Json(record))
}

/// Today's (or the requested date's) attendance aggregate for the session's
/// partition. The date reads in either calendar.
#[get("/attendance/daily?<date>")]
pub async fn daily(
    pool: &State<DbPool>,
    session: AdminSession,
    date: Option<String>,
) -> Result<Json<DailyAttendanceReport>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let date = match date {
        Some(date) => calendar::parse_date_input(&date).map_err(|error| {
            (
                Status::UnprocessableEntity,
                Json(Notice::danger(error.to_string())),
            )
        })?,
        None => now().date(),
    };

    let report = attendance::daily_report(&mut connection, session.gender(), date, now())
        .map_err(notice::attendance_error)?;

    Ok(Json(report))
}

#[get("/athletes/<athlete_id>/attendance")]
pub async fn history(
    pool: &State<DbPool>,
    session: AdminSession,
    athlete_id: i32,
) -> Result<Json<Vec<AttendanceRecord>>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    registry::find(&mut connection, athlete_id, session.gender(), now())
        .map_err(notice::registry_error)?;

    let records =
        attendance::history(&mut connection, athlete_id).map_err(notice::attendance_error)?;

    Ok(Json(records))
}
