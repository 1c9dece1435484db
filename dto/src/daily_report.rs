use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The attendance aggregate for the active population of one gender on one
/// date. `absent` is derived as `total_active - present`, which counts an
/// athlete with a still-open session as neither present nor absent; the
/// arithmetic is kept as the product defined it.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct DailyAttendanceReport {
    date: NaiveDate,
    total_active: i64,
    present: i64,
    active: i64,
    absent: i64,
}

impl DailyAttendanceReport {
    pub fn new(date: NaiveDate, total_active: i64, present: i64, active: i64) -> Self {
        Self {
            date,
            total_active,
            present,
            active,
            absent: total_active - present,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_absent_from_present_only() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let report = DailyAttendanceReport::new(date, 10, 4, 3);

        // The 3 open sessions are not counted as present, so they still
        // inflate the absent bucket.
        assert_eq!(6, *report.absent());
    }
}
