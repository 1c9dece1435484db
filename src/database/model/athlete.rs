use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::CorruptStoredValue;
use crate::database::model::parse_datetime;
use chrono::NaiveDate;
use diesel::prelude::*;
use dto::gender::Gender;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::athlete)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Athlete {
    id: i32,
    first_name: String,
    last_name: String,
    gender: String,
    phone: String,
    emergency_phone: Option<String>,
    father_name: Option<String>,
    birth_date: Option<String>,
    registration_date: String,
    start_date: String,
    original_days: i32,
}

impl TryFrom<Athlete> for dto::athlete::Athlete {
    type Error = DatabaseError;

    fn try_from(value: Athlete) -> Result<Self, Self::Error> {
        let gender = Gender::from_str(&value.gender).map_err(CorruptStoredValue)?;
        let birth_date = match value.birth_date {
            Some(birth_date) => Some(NaiveDate::from_str(&birth_date)?),
            None => None,
        };
        let registration_date = parse_datetime(&value.registration_date)?;
        let start_date = NaiveDate::from_str(&value.start_date)?;

        Ok(dto::athlete::Athlete::new(
            value.id,
            value.first_name,
            value.last_name,
            gender,
            value.phone,
            value.emergency_phone,
            value.father_name,
            birth_date,
            registration_date,
            start_date,
            value.original_days,
        ))
    }
}
