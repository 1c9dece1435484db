use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::tools::password::hash_password;
use diesel::SqliteConnection;
use dto::gender::Gender;

/// Insert an admin account with a freshly salted password digest. Runs from
/// the provisioning binary only; the web surface never writes admins.
pub fn provision(
    connection: &mut SqliteConnection,
    username: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    gender: &Gender,
) -> Result<(), DatabaseError> {
    let password_hash = hash_password(password);
    dao::admin::insert(
        connection,
        username,
        &password_hash,
        first_name,
        last_name,
        gender,
    )?;

    Ok(())
}
