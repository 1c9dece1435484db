use crate::database::error::DatabaseError;
use chrono::NaiveDateTime;

pub(crate) mod activity_log;
pub(crate) mod admin;
pub(crate) mod athlete;
pub(crate) mod attendance;

pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

pub(crate) fn parse_datetime(value: &str) -> Result<NaiveDateTime, DatabaseError> {
    Ok(NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn should_round_trip_datetime() {
        let datetime = NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(18, 45, 12)
            .unwrap();

        assert_eq!(Ok(datetime), parse_datetime(&format_datetime(datetime)));
    }

    #[test]
    fn should_fail_to_parse_corrupt_datetime() {
        assert!(parse_datetime("yesterday").is_err());
    }
}
