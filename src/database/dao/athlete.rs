use super::Result;
use crate::database::error::DatabaseError;
use crate::database::model::athlete::Athlete;
use crate::database::model::format_datetime;
use crate::database::with_busy_retry;
use diesel::prelude::*;
use dto::gender::Gender;

/// Every athlete across both partitions. The reminder job scans the whole
/// registry; everything request-facing goes through [find_all] instead.
pub(crate) fn find_everyone(
    connection: &mut SqliteConnection,
) -> Result<Vec<dto::athlete::Athlete>> {
    use crate::database::schema::athlete::dsl;

    let results = dsl::athlete
        .order(dsl::registration_date.desc())
        .select(Athlete::as_select())
        .load(connection)?;

    results
        .into_iter()
        .map(dto::athlete::Athlete::try_from)
        .collect()
}

/// All athletes of one gender partition, newest registration first.
pub(crate) fn find_all(
    connection: &mut SqliteConnection,
    gender: &Gender,
) -> Result<Vec<dto::athlete::Athlete>> {
    use crate::database::schema::athlete::dsl;

    let results = dsl::athlete
        .filter(dsl::gender.eq(gender.to_string()))
        .order(dsl::registration_date.desc())
        .select(Athlete::as_select())
        .load(connection)?;

    results
        .into_iter()
        .map(dto::athlete::Athlete::try_from)
        .collect()
}

pub(crate) fn find_by_id(
    connection: &mut SqliteConnection,
    athlete_id: i32,
) -> Result<Option<dto::athlete::Athlete>> {
    use crate::database::schema::athlete::dsl;

    let result = dsl::athlete
        .find(athlete_id)
        .select(Athlete::as_select())
        .first(connection)
        .optional()?;

    result.map(dto::athlete::Athlete::try_from).transpose()
}

pub(crate) fn exists(connection: &mut SqliteConnection, athlete_id: i32) -> Result<bool> {
    use crate::database::schema::athlete::dsl;

    let count: i64 = dsl::athlete
        .find(athlete_id)
        .count()
        .get_result(connection)?;

    Ok(count > 0)
}

pub(crate) fn insert(
    connection: &mut SqliteConnection,
    athlete: &dto::athlete::Athlete,
) -> Result<usize> {
    use crate::database::schema::athlete::*;

    with_busy_retry(|| {
        diesel::insert_into(table)
            .values((
                id.eq(athlete.id()),
                first_name.eq(athlete.first_name().clone()),
                last_name.eq(athlete.last_name().clone()),
                gender.eq(athlete.gender().to_string()),
                phone.eq(athlete.phone().clone()),
                emergency_phone.eq(athlete.emergency_phone().clone()),
                father_name.eq(athlete.father_name().clone()),
                birth_date.eq(athlete.birth_date().map(|date| date.to_string())),
                registration_date.eq(format_datetime(*athlete.registration_date())),
                start_date.eq(athlete.start_date().to_string()),
                original_days.eq(athlete.original_days()),
            ))
            .execute(connection)
            .map_err(DatabaseError::from)
    })
}

/// Overwrite the contact/identity columns. The membership clock columns are
/// deliberately not part of this statement: they change through
/// [update_membership] only.
pub(crate) fn update_contact(
    connection: &mut SqliteConnection,
    athlete: &dto::athlete::Athlete,
) -> Result<usize> {
    use crate::database::schema::athlete::*;

    with_busy_retry(|| {
        diesel::update(table.find(athlete.id()))
            .set((
                first_name.eq(athlete.first_name().clone()),
                last_name.eq(athlete.last_name().clone()),
                phone.eq(athlete.phone().clone()),
                emergency_phone.eq(athlete.emergency_phone().clone()),
                father_name.eq(athlete.father_name().clone()),
                birth_date.eq(athlete.birth_date().map(|date| date.to_string())),
            ))
            .execute(connection)
            .map_err(DatabaseError::from)
    })
}

pub(crate) fn update_membership(
    connection: &mut SqliteConnection,
    athlete_id: i32,
    new_start_date: chrono::NaiveDate,
    new_original_days: i32,
) -> Result<usize> {
    use crate::database::schema::athlete::*;

    with_busy_retry(|| {
        diesel::update(table.find(athlete_id))
            .set((
                start_date.eq(new_start_date.to_string()),
                original_days.eq(new_original_days),
            ))
            .execute(connection)
            .map_err(DatabaseError::from)
    })
}

pub(crate) fn delete(connection: &mut SqliteConnection, athlete_id: i32) -> Result<usize> {
    use crate::database::schema::athlete::dsl;

    with_busy_retry(|| {
        diesel::delete(dsl::athlete.find(athlete_id))
            .execute(connection)
            .map_err(DatabaseError::from)
    })
}
