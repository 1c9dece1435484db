#[macro_use]
extern crate log;

use chrono::Local;
use gym_manager::backup;
use gym_manager::database;
use gym_manager::tools::{log_error_and_return, log_message_and_return};
use rocket::tokio::runtime::Runtime;
use std::path::Path;
use std::process::exit;
use std::time::SystemTime;

/// One-shot job, meant to run from a scheduler: snapshot the database file,
/// mail it, drop snapshots past the retention window. Only a failed snapshot
/// is fatal; mail and cleanup failures are logged and swallowed.
fn main() {
    env_logger::init();

    if run().is_err() {
        exit(1);
    }
}

fn run() -> Result<(), ()> {
    let database_path = database::retrieve_database_url().map_err(log_error_and_return(()))?;
    let backup_dir = backup::retrieve_backup_dir().map_err(log_error_and_return(()))?;
    let now = Local::now().naive_local();

    let snapshot_path = backup::snapshot(Path::new(&database_path), &backup_dir, now)
        .map_err(log_message_and_return("Couldn't snapshot the database", ()))?;

    match backup::retrieve_backup_recipient() {
        Ok(recipient) => {
            let runtime = Runtime::new().map_err(log_error_and_return(()))?;
            runtime
                .block_on(backup::email_snapshot(&snapshot_path, &recipient, now))
                .unwrap_or_else(log_message_and_return(
                    "Couldn't mail the snapshot; it stays on disk",
                    (),
                ));
        }
        Err(error) => warn!("No backup recipient configured, skipping mail.\n{error:#?}"),
    }

    backup::cleanup_old_snapshots(&backup_dir, SystemTime::now())
        .map(|removed| info!("Removed {removed} old snapshots"))
        .unwrap_or_else(log_message_and_return("Couldn't clean up old snapshots", ()));

    Ok(())
}
