use crate::attendance::error::AttendanceError;
use crate::attendance::error::AttendanceError::{
    AlreadyCheckedIn, AthleteInactive, NoOpenSession, UnknownAthlete,
};
use crate::database::dao;
use crate::database::with_busy_retry;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::SqliteConnection;
use dto::attendance::AttendanceRecord;
use dto::daily_report::DailyAttendanceReport;
use dto::gender::Gender;
use dto::membership_status::MembershipStatus;
use std::collections::HashSet;

pub mod error;

type Result<T, E = AttendanceError> = std::result::Result<T, E>;

/// Open a session for the athlete on the current date.
///
/// The open-record test and the insert run in one write transaction, so two
/// racing check-ins for the same athlete serialize: the second one observes
/// the first one's record and fails.
pub fn check_in(
    connection: &mut SqliteConnection,
    athlete_id: i32,
    now: NaiveDateTime,
) -> Result<AttendanceRecord> {
    ensure_active(connection, athlete_id, now)?;

    with_busy_retry(|| {
        dao::attendance::in_write_transaction(connection, |transaction| {
            if dao::attendance::find_open_record(transaction, athlete_id, now.date())?.is_some() {
                return Ok(Err(AlreadyCheckedIn(athlete_id)));
            }
            let record = dao::attendance::insert_check_in(transaction, athlete_id, now)?;

            Ok(Ok(record))
        })
    })?
}

/// Close the athlete's open session for the current date. With several open
/// records (historical corruption), the most recently opened one is closed.
pub fn check_out(
    connection: &mut SqliteConnection,
    athlete_id: i32,
    now: NaiveDateTime,
) -> Result<AttendanceRecord> {
    ensure_active(connection, athlete_id, now)?;

    with_busy_retry(|| {
        dao::attendance::in_write_transaction(connection, |transaction| {
            let open_record =
                match dao::attendance::find_open_record(transaction, athlete_id, now.date())? {
                    Some(record) => record,
                    None => return Ok(Err(NoOpenSession(athlete_id))),
                };
            dao::attendance::close_record(transaction, *open_record.id(), now)?;

            Ok(Ok(AttendanceRecord::new(
                *open_record.id(),
                athlete_id,
                *open_record.check_in_time(),
                Some(now),
                *open_record.date(),
            )))
        })
    })?
}

/// The attendance aggregate over the active population of one gender.
///
/// `absent` is `total_active - present`: an athlete whose session is still
/// open counts as neither present nor absent-reducing, so the absent bucket
/// overstates while sessions are open. That arithmetic is the product
/// contract; don't correct it here.
pub fn daily_report(
    connection: &mut SqliteConnection,
    gender: &Gender,
    date: NaiveDate,
    now: NaiveDateTime,
) -> Result<DailyAttendanceReport> {
    let athletes = dao::athlete::find_all(connection, gender)?;
    let active_ids = athletes
        .iter()
        .filter(|athlete| {
            *MembershipStatus::compute(*athlete.start_date(), *athlete.original_days(), now)
                .active()
        })
        .map(|athlete| *athlete.id())
        .collect::<HashSet<i32>>();

    let mut present = HashSet::new();
    let mut still_active = HashSet::new();
    for record in dao::attendance::find_by_date(connection, date)? {
        if !active_ids.contains(record.athlete_id()) {
            continue;
        }
        if record.is_open() {
            still_active.insert(*record.athlete_id());
        } else {
            present.insert(*record.athlete_id());
        }
    }

    Ok(DailyAttendanceReport::new(
        date,
        active_ids.len() as i64,
        present.len() as i64,
        still_active.len() as i64,
    ))
}

/// One athlete's full attendance history, newest first.
pub fn history(
    connection: &mut SqliteConnection,
    athlete_id: i32,
) -> Result<Vec<AttendanceRecord>> {
    Ok(dao::attendance::find_by_athlete(connection, athlete_id)?)
}

/// Both transitions require an active membership at the time of the action.
fn ensure_active(
    connection: &mut SqliteConnection,
    athlete_id: i32,
    now: NaiveDateTime,
) -> Result<()> {
    let athlete = dao::athlete::find_by_id(connection, athlete_id)?
        .ok_or(UnknownAthlete(athlete_id))?;
    let status = MembershipStatus::compute(*athlete.start_date(), *athlete.original_days(), now);

    if *status.active() {
        Ok(())
    } else {
        Err(AthleteInactive(athlete_id))
    }
}
