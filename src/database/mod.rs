use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{ConnectionFailed, MissingDatabaseUrl};
use crate::database::migrations::run_migrations;
use crate::error::Result;
use crate::tools::env_args::retrieve_expected_arg_value;
use crate::tools::log_error_and_return;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{Connection, SqliteConnection};
use rand::Rng;
use std::thread;
use std::time::Duration;

pub(crate) mod dao;
pub mod error;
mod migrations;
mod model;
mod schema;

pub const DATABASE_URL_ARG: &str = "--database-url";

const MAX_BUSY_RETRY_COUNT: u32 = 5;
const BUSY_RETRY_BASE_DELAY_IN_MILLIS: u64 = 20;

/// Connect to the database, run pending migrations and build the shared pool.
/// A failure here is fatal: the server can't start without its store.
pub fn init_db() -> Result<Pool<ConnectionManager<SqliteConnection>>> {
    let database_url = retrieve_database_url()?;
    let mut connection = SqliteConnection::establish(&database_url)
        .map_err(log_error_and_return(ConnectionFailed))?;
    run_migrations(&mut connection)?;

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .build(manager)
        .map_err(log_error_and_return(ConnectionFailed))?;

    Ok(pool)
}

pub fn retrieve_database_url() -> Result<String, DatabaseError> {
    retrieve_expected_arg_value(DATABASE_URL_ARG, MissingDatabaseUrl)
}

/// Open a single connection outside the pool. Job binaries use this.
pub fn establish_connection() -> Result<SqliteConnection, DatabaseError> {
    let database_url = retrieve_database_url()?;

    SqliteConnection::establish(&database_url).map_err(log_error_and_return(ConnectionFailed))
}

/// Run an operation against the store, retrying on lock contention.
///
/// The backing store is a single file shared by every request handler, so a
/// write can land while another one holds the lock. Busy outcomes are retried
/// with jittered backoff up to a fixed budget, then surfaced to the caller as
/// [DatabaseError::Busy].
pub(crate) fn with_busy_retry<T, F>(mut operation: F) -> Result<T, DatabaseError>
where
    F: FnMut() -> Result<T, DatabaseError>,
{
    let mut attempt = 0;
    loop {
        match operation() {
            Err(DatabaseError::Busy) if attempt < MAX_BUSY_RETRY_COUNT => {
                attempt += 1;
                let jitter = rand::rng().random_range(0..BUSY_RETRY_BASE_DELAY_IN_MILLIS);
                thread::sleep(Duration::from_millis(
                    BUSY_RETRY_BASE_DELAY_IN_MILLIS * attempt as u64 + jitter,
                ));
            }
            result => return result,
        }
    }
}

#[cfg(test)]
pub(crate) fn with_temp_database<F, T>(function: F) -> T
where
    F: FnOnce() -> T,
{
    use crate::tools::env_args::with_env_args;

    let temp_dir = crate::tools::test::tests::temp_dir();
    let database_url = temp_dir.join("database.db").to_str().unwrap().to_string();
    with_env_args(vec![format!("{DATABASE_URL_ARG}={database_url}")], || {
        let mut connection = SqliteConnection::establish(&database_url).unwrap();
        run_migrations(&mut connection).unwrap();
        function()
    })
}

#[cfg(test)]
mod tests {
    use crate::database::error::DatabaseError;
    use crate::database::with_busy_retry;

    mod with_busy_retry {
        use super::*;

        #[test]
        fn should_succeed_after_transient_busy_outcomes() {
            let mut remaining_failures = 2;
            let result = with_busy_retry(|| {
                if remaining_failures > 0 {
                    remaining_failures -= 1;
                    Err(DatabaseError::Busy)
                } else {
                    Ok(42)
                }
            });

            assert_eq!(Ok(42), result);
        }

        #[test]
        fn should_give_up_when_retry_budget_is_exceeded() {
            let mut attempts = 0;
            let result: Result<(), _> = with_busy_retry(|| {
                attempts += 1;
                Err(DatabaseError::Busy)
            });

            assert_eq!(Err(DatabaseError::Busy), result);
            assert_eq!(6, attempts);
        }

        #[test]
        fn should_not_retry_other_errors() {
            let mut attempts = 0;
            let result: Result<(), _> = with_busy_retry(|| {
                attempts += 1;
                Err(DatabaseError::UnderlyingDatabase("oops".to_owned()))
            });

            assert_eq!(
                Err(DatabaseError::UnderlyingDatabase("oops".to_owned())),
                result
            );
            assert_eq!(1, attempts);
        }
    }
}
