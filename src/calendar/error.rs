use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    #[error("The value doesn't read as a date: {0}")]
    InvalidDateFormat(String),
    #[error("The date falls outside the supported conversion range: {0}")]
    UnsupportedDate(String),
}
