use crate::calendar::error::CalendarError;
use crate::database::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("The {0} field is required.")]
    MissingField(&'static str),
    #[error("The phone number doesn't look like a mobile number: {0}")]
    InvalidPhoneNumber(String),
    #[error("The entitlement must be a positive number of days.")]
    InvalidEntitlement,
    #[error(transparent)]
    InvalidDate(#[from] CalendarError),
    #[error("No athlete bears the id {0}.")]
    NotFound(i32),
    #[error("No free 4-digit id could be drawn. The registry is saturated.")]
    IdPoolExhausted,
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
