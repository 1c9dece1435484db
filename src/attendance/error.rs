use crate::database::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AttendanceError {
    #[error("Athlete {0} already has an open session for that date.")]
    AlreadyCheckedIn(i32),
    #[error("Athlete {0} has no open session to close.")]
    NoOpenSession(i32),
    #[error("Athlete {0}'s membership has expired.")]
    AthleteInactive(i32),
    #[error("No athlete bears the id {0}.")]
    UnknownAthlete(i32),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
