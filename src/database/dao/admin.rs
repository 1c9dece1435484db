use super::Result;
use crate::database::error::DatabaseError;
use crate::database::model::admin::Admin;
use crate::database::with_busy_retry;
use diesel::prelude::*;
use dto::gender::Gender;

pub(crate) fn find_by_username(
    connection: &mut SqliteConnection,
    for_username: &str,
) -> Result<Option<Admin>> {
    use crate::database::schema::admin::dsl;

    let result = dsl::admin
        .filter(dsl::username.eq(for_username))
        .select(Admin::as_select())
        .first(connection)
        .optional()?;

    Ok(result)
}

pub(crate) fn insert(
    connection: &mut SqliteConnection,
    for_username: &str,
    for_password_hash: &str,
    for_first_name: &str,
    for_last_name: &str,
    for_gender: &Gender,
) -> Result<usize> {
    use crate::database::schema::admin::*;

    with_busy_retry(|| {
        diesel::insert_into(table)
            .values((
                username.eq(for_username.to_owned()),
                password_hash.eq(for_password_hash.to_owned()),
                first_name.eq(for_first_name.to_owned()),
                last_name.eq(for_last_name.to_owned()),
                gender.eq(for_gender.to_string()),
            ))
            .execute(connection)
            .map_err(DatabaseError::from)
    })
}
