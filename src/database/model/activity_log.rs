use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::CorruptStoredValue;
use crate::database::model::parse_datetime;
use diesel::prelude::*;
use dto::activity::ActivityAction;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::activity_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ActivityLogEntry {
    id: i32,
    timestamp: String,
    action: String,
    details: String,
    athlete_id: Option<i32>,
}

impl TryFrom<ActivityLogEntry> for dto::activity::ActivityLogEntry {
    type Error = DatabaseError;

    fn try_from(value: ActivityLogEntry) -> Result<Self, Self::Error> {
        let timestamp = parse_datetime(&value.timestamp)?;
        let action = ActivityAction::from_str(&value.action).map_err(CorruptStoredValue)?;

        Ok(dto::activity::ActivityLogEntry::new(
            value.id,
            timestamp,
            action,
            value.details,
            value.athlete_id,
        ))
    }
}
