use chrono::{Days, NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The membership clock of an athlete, derived from their start date and
/// entitlement as of a given instant. Negative balances never surface:
/// `remaining_days` is clamped to zero.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MembershipStatus {
    end_date: NaiveDate,
    remaining_days: i64,
    active: bool,
}

impl MembershipStatus {
    pub fn compute(start_date: NaiveDate, original_days: i32, now: NaiveDateTime) -> Self {
        let end_date = start_date
            .checked_add_days(Days::new(original_days.max(0) as u64))
            .unwrap_or(NaiveDate::MAX);
        let remaining_days = (end_date - now.date()).num_days().max(0);

        Self {
            end_date,
            remaining_days,
            active: remaining_days > 0,
        }
    }

    /// Expiring soon means strictly between 0 and 7 remaining days.
    pub fn is_expiring_soon(&self) -> bool {
        self.remaining_days > 0 && self.remaining_days < 7
    }

    /// The 48h threshold is inclusive, unlike [Self::is_expiring_soon] which
    /// excludes zero. The two boundaries are part of the compatibility
    /// contract and must not be harmonized.
    pub fn is_expiring_within_48h(&self) -> bool {
        self.remaining_days <= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[parameterized(
        start_date = {date(2026, 8, 1), date(2026, 7, 6), date(2026, 6, 1), date(2026, 8, 5)},
        original_days = {30, 30, 30, 0},
        expected_remaining = {26, 1, 0, 0},
        expected_active = {true, true, false, false}
    )]
    fn should_compute_status(
        start_date: NaiveDate,
        original_days: i32,
        expected_remaining: i64,
        expected_active: bool,
    ) {
        let status = MembershipStatus::compute(start_date, original_days, now());

        assert_eq!(expected_remaining, *status.remaining_days());
        assert_eq!(expected_active, *status.active());
    }

    #[test]
    fn should_never_go_negative() {
        let status = MembershipStatus::compute(date(2020, 1, 1), 10, now());

        assert_eq!(0, *status.remaining_days());
        assert!(!status.active());
    }

    #[test]
    fn should_compute_end_date_by_calendar_day_addition() {
        let status = MembershipStatus::compute(date(2026, 8, 1), 31, now());

        assert_eq!(date(2026, 9, 1), *status.end_date());
    }

    #[parameterized(
        remaining = {0, 1, 6, 7, 10},
        expiring_soon = {false, true, true, false, false}
    )]
    fn should_flag_expiring_soon_with_exclusive_bounds(remaining: i64, expiring_soon: bool) {
        let start_date = now().date() - chrono::Days::new(30) + chrono::Days::new(remaining as u64);
        let status = MembershipStatus::compute(start_date, 30, now());

        assert_eq!(remaining, *status.remaining_days());
        assert_eq!(expiring_soon, status.is_expiring_soon());
    }

    #[parameterized(
        remaining = {0, 1, 2, 3},
        expiring_within_48h = {true, true, true, false}
    )]
    fn should_flag_48h_threshold_inclusively(remaining: i64, expiring_within_48h: bool) {
        let start_date = now().date() - chrono::Days::new(30) + chrono::Days::new(remaining as u64);
        let status = MembershipStatus::compute(start_date, 30, now());

        assert_eq!(expiring_within_48h, status.is_expiring_within_48h());
    }
}
