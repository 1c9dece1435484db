use crate::attendance::error::AttendanceError;
use crate::backup::error::BackupError;
use crate::calendar::error::CalendarError;
use crate::database::error::DatabaseError;
use crate::gift::error::GiftError;
use crate::notification::error::NotificationError;
use crate::registry::error::RegistryError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has occurred with the database.")]
    Database(#[from] DatabaseError),
    #[error("Error in the athlete registry.")]
    Registry(#[from] RegistryError),
    #[error("Error in the attendance flow.")]
    Attendance(#[from] AttendanceError),
    #[error("Error while converting calendar dates.")]
    Calendar(#[from] CalendarError),
    #[error("Error while delivering notifications.")]
    Notification(#[from] NotificationError),
    #[error("Error during backup.")]
    Backup(#[from] BackupError),
    #[error("Error in the gift lottery.")]
    Gift(#[from] GiftError),
}
