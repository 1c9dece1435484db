use chrono::{NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One check-in attempt. A null `check_out_time` marks the session as still
/// open; closing it is the only mutation the record ever sees.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct AttendanceRecord {
    id: i32,
    athlete_id: i32,
    check_in_time: NaiveDateTime,
    check_out_time: Option<NaiveDateTime>,
    date: NaiveDate,
}

impl AttendanceRecord {
    pub fn new(
        id: i32,
        athlete_id: i32,
        check_in_time: NaiveDateTime,
        check_out_time: Option<NaiveDateTime>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            athlete_id,
            check_in_time,
            check_out_time,
            date,
        }
    }

    pub fn is_open(&self) -> bool {
        self.check_out_time.is_none()
    }

    /// The session duration, if the record is closed.
    pub fn duration(&self) -> Option<SessionDuration> {
        self.check_out_time
            .map(|check_out_time| SessionDuration::between(self.check_in_time, check_out_time))
    }
}

/// Whole hours plus remainder minutes. Seconds are truncated, not rounded.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct SessionDuration {
    hours: i64,
    minutes: i64,
}

impl SessionDuration {
    pub fn between(check_in_time: NaiveDateTime, check_out_time: NaiveDateTime) -> Self {
        let total_minutes = (check_out_time - check_in_time).num_minutes().max(0);

        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl Display for SessionDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use parameterized::{ide, parameterized};

    ide!();

    fn time(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[parameterized(
        check_in = {time(10, 0, 0), time(10, 0, 0), time(10, 0, 0), time(23, 0, 0)},
        check_out = {time(11, 15, 0), time(10, 0, 59), time(12, 0, 30), time(23, 59, 59)},
        expected = {"1h 15m", "0h 0m", "2h 0m", "0h 59m"}
    )]
    fn should_truncate_seconds(check_in: NaiveDateTime, check_out: NaiveDateTime, expected: &str) {
        let duration = SessionDuration::between(check_in, check_out);

        assert_eq!(expected, duration.to_string());
    }

    #[test]
    fn should_report_open_record_without_duration() {
        let record = AttendanceRecord::new(1, 4821, time(10, 0, 0), None, time(0, 0, 0).date());

        assert!(record.is_open());
        assert_eq!(None, record.duration());
    }
}
