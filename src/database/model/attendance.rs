use crate::database::error::DatabaseError;
use crate::database::model::parse_datetime;
use chrono::NaiveDate;
use diesel::prelude::*;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::attendance_record)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct AttendanceRecord {
    id: i32,
    athlete_id: i32,
    check_in_time: String,
    check_out_time: Option<String>,
    date: String,
}

impl TryFrom<AttendanceRecord> for dto::attendance::AttendanceRecord {
    type Error = DatabaseError;

    fn try_from(value: AttendanceRecord) -> Result<Self, Self::Error> {
        let check_in_time = parse_datetime(&value.check_in_time)?;
        let check_out_time = match value.check_out_time {
            Some(check_out_time) => Some(parse_datetime(&check_out_time)?),
            None => None,
        };
        let date = NaiveDate::from_str(&value.date)?;

        Ok(dto::attendance::AttendanceRecord::new(
            value.id,
            value.athlete_id,
            check_in_time,
            check_out_time,
            date,
        ))
    }
}
