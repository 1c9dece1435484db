use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("The --backup-dir argument is missing.")]
    MissingBackupDir,
    #[error("The --backup-recipient argument is missing.")]
    MissingBackupRecipient,
    #[error("Filesystem operation failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Email(#[from] crate::tools::email::Error),
}
