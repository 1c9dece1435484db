use super::Result;
use crate::database::error::DatabaseError;
use crate::database::model::attendance::AttendanceRecord;
use crate::database::model::format_datetime;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

/// The open (not yet checked-out) record for one athlete on one date, if any.
/// With several historical records on the same day, the most recently opened
/// one wins.
pub(crate) fn find_open_record(
    connection: &mut SqliteConnection,
    for_athlete_id: i32,
    for_date: NaiveDate,
) -> Result<Option<dto::attendance::AttendanceRecord>> {
    use crate::database::schema::attendance_record::dsl;

    let result = dsl::attendance_record
        .filter(dsl::athlete_id.eq(for_athlete_id))
        .filter(dsl::date.eq(for_date.to_string()))
        .filter(dsl::check_out_time.is_null())
        .order(dsl::check_in_time.desc())
        .select(AttendanceRecord::as_select())
        .first(connection)
        .optional()?;

    result
        .map(dto::attendance::AttendanceRecord::try_from)
        .transpose()
}

pub(crate) fn insert_check_in(
    connection: &mut SqliteConnection,
    for_athlete_id: i32,
    now: NaiveDateTime,
) -> Result<dto::attendance::AttendanceRecord> {
    use crate::database::schema::attendance_record::*;

    let result = diesel::insert_into(table)
        .values((
            athlete_id.eq(for_athlete_id),
            check_in_time.eq(format_datetime(now)),
            date.eq(now.date().to_string()),
        ))
        .returning(AttendanceRecord::as_returning())
        .get_result(connection)?;

    dto::attendance::AttendanceRecord::try_from(result)
}

pub(crate) fn close_record(
    connection: &mut SqliteConnection,
    record_id: i32,
    now: NaiveDateTime,
) -> Result<usize> {
    use crate::database::schema::attendance_record::*;

    let count = diesel::update(table.find(record_id))
        .set(check_out_time.eq(format_datetime(now)))
        .execute(connection)?;

    Ok(count)
}

pub(crate) fn find_by_date(
    connection: &mut SqliteConnection,
    for_date: NaiveDate,
) -> Result<Vec<dto::attendance::AttendanceRecord>> {
    use crate::database::schema::attendance_record::dsl;

    let results = dsl::attendance_record
        .filter(dsl::date.eq(for_date.to_string()))
        .order(dsl::check_in_time.desc())
        .select(AttendanceRecord::as_select())
        .load(connection)?;

    results
        .into_iter()
        .map(dto::attendance::AttendanceRecord::try_from)
        .collect()
}

/// Full attendance history of one athlete, newest first.
pub(crate) fn find_by_athlete(
    connection: &mut SqliteConnection,
    for_athlete_id: i32,
) -> Result<Vec<dto::attendance::AttendanceRecord>> {
    use crate::database::schema::attendance_record::dsl;

    let results = dsl::attendance_record
        .filter(dsl::athlete_id.eq(for_athlete_id))
        .order(dsl::check_in_time.desc())
        .select(AttendanceRecord::as_select())
        .load(connection)?;

    results
        .into_iter()
        .map(dto::attendance::AttendanceRecord::try_from)
        .collect()
}

// Used by the state machine to keep the open-record test and the insert in
// one write transaction.
pub(crate) fn in_write_transaction<T, F>(
    connection: &mut SqliteConnection,
    operation: F,
) -> Result<T>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, DatabaseError>,
{
    connection.immediate_transaction(operation)
}

#[cfg(test)]
mod tests {
    use crate::database::with_temp_database;
    use chrono::{NaiveDate, NaiveDateTime};
    use diesel::SqliteConnection;

    fn establish_connection() -> SqliteConnection {
        crate::database::establish_connection().unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    mod find_open_record {
        use super::*;

        #[test]
        fn should_find_nothing_when_no_record() {
            with_temp_database(|| {
                let mut connection = establish_connection();

                let result =
                    super::super::find_open_record(&mut connection, 4821, time(10, 0).date())
                        .unwrap();

                assert_eq!(None, result);
            })
        }

        #[test]
        fn should_find_latest_open_record() {
            with_temp_database(|| {
                let mut connection = establish_connection();
                let _earlier =
                    super::super::insert_check_in(&mut connection, 4821, time(8, 0)).unwrap();
                let later =
                    super::super::insert_check_in(&mut connection, 4821, time(10, 0)).unwrap();

                let result =
                    super::super::find_open_record(&mut connection, 4821, time(10, 0).date())
                        .unwrap();

                assert_eq!(Some(later), result);
            })
        }

        #[test]
        fn should_ignore_closed_records() {
            with_temp_database(|| {
                let mut connection = establish_connection();
                let record =
                    super::super::insert_check_in(&mut connection, 4821, time(8, 0)).unwrap();
                super::super::close_record(&mut connection, *record.id(), time(9, 30)).unwrap();

                let result =
                    super::super::find_open_record(&mut connection, 4821, time(10, 0).date())
                        .unwrap();

                assert_eq!(None, result);
            })
        }

        #[test]
        fn should_ignore_other_athletes() {
            with_temp_database(|| {
                let mut connection = establish_connection();
                super::super::insert_check_in(&mut connection, 7302, time(8, 0)).unwrap();

                let result =
                    super::super::find_open_record(&mut connection, 4821, time(10, 0).date())
                        .unwrap();

                assert_eq!(None, result);
            })
        }
    }

    mod close_record {
        use super::*;

        #[test]
        fn should_set_check_out_time() {
            with_temp_database(|| {
                let mut connection = establish_connection();
                let record =
                    super::super::insert_check_in(&mut connection, 4821, time(10, 0)).unwrap();

                let count =
                    super::super::close_record(&mut connection, *record.id(), time(11, 15))
                        .unwrap();
                assert_eq!(1, count);

                let records =
                    super::super::find_by_athlete(&mut connection, 4821).unwrap();
                assert_eq!(Some(time(11, 15)), *records[0].check_out_time());
                assert_eq!("1h 15m", records[0].duration().unwrap().to_string());
            })
        }
    }

    mod find_by_date {
        use super::*;

        #[test]
        fn should_only_return_records_of_the_date() {
            with_temp_database(|| {
                let mut connection = establish_connection();
                super::super::insert_check_in(&mut connection, 4821, time(10, 0)).unwrap();
                let other_day = NaiveDate::from_ymd_opt(2026, 8, 4)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap();
                super::super::insert_check_in(&mut connection, 4821, other_day).unwrap();

                let records =
                    super::super::find_by_date(&mut connection, time(10, 0).date()).unwrap();

                assert_eq!(1, records.len());
                assert_eq!(time(10, 0).date(), *records[0].date());
            })
        }
    }
}
