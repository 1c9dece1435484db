use crate::database::error::DatabaseError::{Busy, CorruptStoredValue, UnderlyingDatabase};
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatabaseError {
    #[error("The --database-url argument is missing.")]
    MissingDatabaseUrl,
    #[error("The connection to the database failed.")]
    ConnectionFailed,
    #[error("The system is busy. Please retry.")]
    Busy,
    #[error("An error occurred within the database.")]
    UnderlyingDatabase(String),
    #[error("A stored value couldn't be read back: {0}")]
    CorruptStoredValue(String),
}

impl From<Box<dyn Error + Send + Sync + 'static>> for DatabaseError {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(value: diesel::result::Error) -> Self {
        match &value {
            diesel::result::Error::DatabaseError(_, information)
                if information.message().contains("database is locked") =>
            {
                Busy
            }
            _ => UnderlyingDatabase(value.to_string()),
        }
    }
}

impl From<chrono::ParseError> for DatabaseError {
    fn from(value: chrono::ParseError) -> Self {
        CorruptStoredValue(value.to_string())
    }
}
