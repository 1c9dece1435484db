use crate::backup::error::BackupError;
use crate::backup::error::BackupError::{MissingBackupDir, MissingBackupRecipient};
use crate::tools::email::send_email_with_attachment;
use crate::tools::env_args::retrieve_expected_arg_value;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

pub mod error;

pub const BACKUP_DIR_ARG: &str = "--backup-dir";
pub const BACKUP_RECIPIENT_ARG: &str = "--backup-recipient";

const RETENTION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

type Result<T, E = BackupError> = std::result::Result<T, E>;

pub fn retrieve_backup_dir() -> Result<PathBuf> {
    Ok(PathBuf::from(retrieve_expected_arg_value(
        BACKUP_DIR_ARG,
        MissingBackupDir,
    )?))
}

pub fn retrieve_backup_recipient() -> Result<String> {
    retrieve_expected_arg_value(BACKUP_RECIPIENT_ARG, MissingBackupRecipient)
}

/// Copy the database file to a timestamped snapshot under the backup dir.
/// The copy gives the mail step and the notification jobs a point-in-time
/// file to read without contending for the live database's lock.
pub fn snapshot(database_path: &Path, backup_dir: &Path, now: NaiveDateTime) -> Result<PathBuf> {
    fs::create_dir_all(backup_dir)?;
    let file_name = format!("database_backup_{}.db", now.format("%Y%m%d_%H%M%S"));
    let snapshot_path = backup_dir.join(file_name);
    fs::copy(database_path, &snapshot_path)?;
    info!("Backup copied to {}", snapshot_path.display());

    Ok(snapshot_path)
}

/// Mail the snapshot as an attachment.
pub async fn email_snapshot(
    snapshot_path: &Path,
    recipient: &str,
    now: NaiveDateTime,
) -> Result<()> {
    let contents = fs::read(snapshot_path)?;
    let file_name = snapshot_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "database_backup.db".to_owned());
    let subject = format!("Database Backup - {}", now.format("%Y-%m-%d"));
    let body = format!(
        "Database backup attached.\nFile: {file_name}\nDate: {}\nSize: {:.2} KB",
        now.format("%Y-%m-%d %H:%M:%S"),
        contents.len() as f64 / 1024.0,
    );
    send_email_with_attachment(&[recipient], &subject, &body, &file_name, contents).await?;
    info!("Backup sent to {recipient}");

    Ok(())
}

/// Delete snapshots older than the retention window. Returns how many were
/// removed.
pub fn cleanup_old_snapshots(backup_dir: &Path, now: SystemTime) -> Result<usize> {
    if !backup_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(backup_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
        if age > RETENTION {
            fs::remove_file(entry.path())?;
            info!("Deleted old backup: {}", entry.path().display());
            removed += 1;
        }
    }

    Ok(removed)
}
