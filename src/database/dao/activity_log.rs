use super::Result;
use crate::database::error::DatabaseError;
use crate::database::model::activity_log::ActivityLogEntry;
use crate::database::model::format_datetime;
use crate::database::with_busy_retry;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use dto::activity::ActivityAction;

pub(crate) fn insert(
    connection: &mut SqliteConnection,
    now: NaiveDateTime,
    for_action: ActivityAction,
    for_details: &str,
    for_athlete_id: Option<i32>,
) -> Result<usize> {
    use crate::database::schema::activity_log::*;

    with_busy_retry(|| {
        diesel::insert_into(table)
            .values((
                timestamp.eq(format_datetime(now)),
                action.eq(for_action.to_string()),
                details.eq(for_details.to_owned()),
                athlete_id.eq(for_athlete_id),
            ))
            .execute(connection)
            .map_err(DatabaseError::from)
    })
}

/// The whole trail, newest first. Filtering happens in the activity service:
/// the text filter spans resolved athlete names, which are not stored here.
pub(crate) fn find_all(
    connection: &mut SqliteConnection,
) -> Result<Vec<dto::activity::ActivityLogEntry>> {
    use crate::database::schema::activity_log::dsl;

    let results = dsl::activity_log
        .order((dsl::timestamp.desc(), dsl::id.desc()))
        .select(ActivityLogEntry::as_select())
        .load(connection)?;

    results
        .into_iter()
        .map(dto::activity::ActivityLogEntry::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::database::with_temp_database;
    use chrono::{NaiveDate, NaiveDateTime};
    use diesel::SqliteConnection;
    use dto::activity::ActivityAction;

    fn establish_connection() -> SqliteConnection {
        crate::database::establish_connection().unwrap()
    }

    fn time(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn should_append_and_read_back_newest_first() {
        with_temp_database(|| {
            let mut connection = establish_connection();
            super::insert(
                &mut connection,
                time(9),
                ActivityAction::Registration,
                "Registered Ali Rezai",
                Some(4821),
            )
            .unwrap();
            super::insert(
                &mut connection,
                time(10),
                ActivityAction::CheckIn,
                "Ali Rezai checked in",
                Some(4821),
            )
            .unwrap();

            let entries = super::find_all(&mut connection).unwrap();

            assert_eq!(2, entries.len());
            assert_eq!(ActivityAction::CheckIn, *entries[0].action());
            assert_eq!(ActivityAction::Registration, *entries[1].action());
            assert_eq!(Some(4821), *entries[0].athlete_id());
        })
    }

    #[test]
    fn should_accept_entries_without_athlete_reference() {
        with_temp_database(|| {
            let mut connection = establish_connection();
            super::insert(
                &mut connection,
                time(8),
                ActivityAction::Login,
                "admin1 logged in",
                None,
            )
            .unwrap();

            let entries = super::find_all(&mut connection).unwrap();

            assert_eq!(None, *entries[0].athlete_id());
        })
    }
}
