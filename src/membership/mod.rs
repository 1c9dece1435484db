use chrono::{NaiveDate, NaiveDateTime};
use dto::membership_status::MembershipStatus;

/// Apply the renewal policy to an athlete's membership clock and return the
/// new `(start_date, original_days)` pair.
///
/// A lapsed membership restarts today with only the purchased days — the
/// stale balance does not accumulate. A still-active membership keeps its
/// clock and extends the entitlement on top of it.
pub fn renew(
    start_date: NaiveDate,
    original_days: i32,
    additional_days: i32,
    now: NaiveDateTime,
) -> (NaiveDate, i32) {
    let status = MembershipStatus::compute(start_date, original_days, now);

    if *status.active() {
        (start_date, original_days + additional_days)
    } else {
        (now.date(), additional_days)
    }
}
