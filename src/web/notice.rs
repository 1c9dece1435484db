use crate::attendance::error::AttendanceError;
use crate::database::error::DatabaseError;
use crate::registry::error::RegistryError;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Serialize;

/// Every user-visible failure travels as one of these, so the client renders
/// all outcomes through a single mechanism.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Notice {
    severity: Severity,
    message: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Danger,
            message: message.into(),
        }
    }
}

pub type NoticeResponse = (Status, Json<Notice>);

pub fn internal() -> NoticeResponse {
    (
        Status::InternalServerError,
        Json(Notice::danger("Something went wrong on our side.")),
    )
}

pub fn unauthorized() -> NoticeResponse {
    (
        Status::Unauthorized,
        Json(Notice::warning("Wrong username or password.")),
    )
}

/// Lock contention that outlived the retry budget reads as "busy, try
/// again"; anything else is an internal failure.
pub fn database_error(error: DatabaseError) -> NoticeResponse {
    match error {
        DatabaseError::Busy => (
            Status::ServiceUnavailable,
            Json(Notice::warning("The system is busy. Please retry.")),
        ),
        _ => (
            Status::InternalServerError,
            Json(Notice::danger("Something went wrong on our side.")),
        ),
    }
}

pub fn registry_error(error: RegistryError) -> NoticeResponse {
    match error {
        RegistryError::NotFound(_) => {
            (Status::NotFound, Json(Notice::warning(error.to_string())))
        }
        RegistryError::MissingField(_)
        | RegistryError::InvalidPhoneNumber(_)
        | RegistryError::InvalidEntitlement
        | RegistryError::InvalidDate(_) => (
            Status::UnprocessableEntity,
            Json(Notice::danger(error.to_string())),
        ),
        RegistryError::IdPoolExhausted => (
            Status::InternalServerError,
            Json(Notice::danger(error.to_string())),
        ),
        RegistryError::Database(error) => database_error(error),
    }
}

/// State conflicts are warnings: the action was understood but the machine
/// refuses the transition, and nothing was mutated.
pub fn attendance_error(error: AttendanceError) -> NoticeResponse {
    match error {
        AttendanceError::AlreadyCheckedIn(_)
        | AttendanceError::NoOpenSession(_)
        | AttendanceError::AthleteInactive(_) => {
            (Status::Conflict, Json(Notice::warning(error.to_string())))
        }
        AttendanceError::UnknownAthlete(_) => {
            (Status::NotFound, Json(Notice::warning(error.to_string())))
        }
        AttendanceError::Database(error) => database_error(error),
    }
}
