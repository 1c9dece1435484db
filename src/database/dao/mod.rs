use crate::database::error::DatabaseError;

pub(crate) mod activity_log;
pub(crate) mod admin;
pub(crate) mod athlete;
pub(crate) mod attendance;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;
