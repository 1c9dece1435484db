use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::CorruptStoredValue;
use diesel::prelude::*;
use dto::gender::Gender;
use std::str::FromStr;

/// The stored admin record. Never leaves the crate: the password hash stays
/// server-side, only an [dto::admin::AdminProfile] is exposed.
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::admin)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Admin {
    id: i32,
    username: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    gender: String,
}

impl Admin {
    pub(crate) fn id(&self) -> i32 {
        self.id
    }

    pub(crate) fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub(crate) fn gender(&self) -> Result<Gender, DatabaseError> {
        Gender::from_str(&self.gender).map_err(CorruptStoredValue)
    }

    pub(crate) fn to_profile(&self) -> Result<dto::admin::AdminProfile, DatabaseError> {
        Ok(dto::admin::AdminProfile::new(
            self.username.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.gender()?,
        ))
    }
}
