use crate::activity;
use crate::tools::log_message_and_return;
use crate::web::notice::{Notice, NoticeResponse};
use chrono::{Local, NaiveDateTime};
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use dto::activity::ActivityAction;
use rocket::http::Status;
use rocket::serde::json::Json;

pub mod activity_controller;
pub mod athletes_controller;
pub mod attendance_controller;
pub mod dashboard_controller;
pub mod gift_controller;
pub mod server;
pub mod session_controller;

pub(crate) type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub(crate) type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// The gym clock runs on local time.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn get_connection(pool: &DbPool) -> Result<DbConnection, NoticeResponse> {
    pool.get().map_err(log_message_and_return(
        "No database connection available",
        (
            Status::ServiceUnavailable,
            Json(Notice::warning("The system is busy. Please retry.")),
        ),
    ))
}

/// Append an audit-trail entry for an already-committed mutation. A failing
/// append is logged and swallowed: the primary action must not be undone or
/// reported as failed because the trail hiccuped.
pub(crate) fn log_activity(
    connection: &mut SqliteConnection,
    action: ActivityAction,
    details: &str,
    athlete_id: Option<i32>,
) {
    activity::record(connection, now(), action, details, athlete_id)
        .unwrap_or_else(log_message_and_return("Couldn't append to the activity log", ()));
}
