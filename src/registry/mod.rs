use crate::calendar;
use crate::database::dao;
use crate::membership;
use crate::registry::error::RegistryError;
use crate::registry::error::RegistryError::{
    IdPoolExhausted, InvalidEntitlement, InvalidPhoneNumber, MissingField, NotFound,
};
use chrono::{NaiveDate, NaiveDateTime};
use diesel::SqliteConnection;
use dto::athlete::Athlete;
use dto::athlete_summary::AthleteSummary;
use dto::athlete_to_register::AthleteToRegister;
use dto::athlete_update::AthleteUpdate;
use dto::gender::Gender;
use dto::membership_status::MembershipStatus;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

pub mod error;

type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Iranian mobile numbers, with or without the leading zero.
static PHONE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^0?9\\d{9}$").unwrap());

const ID_SPACE: std::ops::RangeInclusive<i32> = 1000..=9999;
const MAX_ID_DRAW_ATTEMPTS: u32 = 100;

/// Register a new athlete: validate the form, draw a free 4-digit id and
/// persist the record. The membership clock starts at the given start date,
/// or today when the form leaves it out.
pub fn register(
    connection: &mut SqliteConnection,
    form: &AthleteToRegister,
    now: NaiveDateTime,
) -> Result<Athlete> {
    let first_name = validate_name(form.first_name(), "first name")?;
    let last_name = validate_name(form.last_name(), "last name")?;
    let phone = validate_phone(form.phone())?;
    if *form.original_days() <= 0 {
        return Err(InvalidEntitlement);
    }
    let birth_date = parse_optional_date(form.birth_date())?;
    let start_date = parse_optional_date(form.start_date())?.unwrap_or(now.date());

    let id = draw_free_id(connection)?;
    let athlete = Athlete::new(
        id,
        first_name,
        last_name,
        *form.gender(),
        phone,
        form.emergency_phone().clone(),
        form.father_name().clone(),
        birth_date,
        now,
        start_date,
        *form.original_days(),
    );
    dao::athlete::insert(connection, &athlete)?;

    Ok(athlete)
}

/// Find athletes matching the query within one gender partition.
///
/// A query matches against the decimal rendition of the id (any digit run,
/// "482" finds 4821) or as a case-sensitive substring of the first name, the
/// last name, or the "first last" concatenation.
pub fn search(
    connection: &mut SqliteConnection,
    query: &str,
    gender: &Gender,
) -> Result<Vec<Athlete>> {
    let query = query.trim();
    let athletes = dao::athlete::find_all(connection, gender)?
        .into_iter()
        .filter(|athlete| {
            athlete.id().to_string().contains(query)
                || athlete.first_name().contains(query)
                || athlete.last_name().contains(query)
                || athlete.full_name().contains(query)
        })
        .collect();

    Ok(athletes)
}

pub fn list(
    connection: &mut SqliteConnection,
    gender: &Gender,
    now: NaiveDateTime,
) -> Result<Vec<AthleteSummary>> {
    Ok(summarize_all(
        dao::athlete::find_all(connection, gender)?,
        now,
    ))
}

pub fn summarize_all(athletes: Vec<Athlete>, now: NaiveDateTime) -> Vec<AthleteSummary> {
    athletes
        .into_iter()
        .map(|athlete| summarize(athlete, now))
        .collect()
}

pub fn find(
    connection: &mut SqliteConnection,
    athlete_id: i32,
    gender: &Gender,
    now: NaiveDateTime,
) -> Result<AthleteSummary> {
    let athlete = find_in_partition(connection, athlete_id, gender)?;

    Ok(summarize(athlete, now))
}

/// Overwrite the contact/identity fields. The membership clock is out of
/// reach here: renewing is the only way to touch it.
pub fn update(
    connection: &mut SqliteConnection,
    athlete_id: i32,
    form: &AthleteUpdate,
    gender: &Gender,
) -> Result<Athlete> {
    let existing = find_in_partition(connection, athlete_id, gender)?;
    let first_name = validate_name(form.first_name(), "first name")?;
    let last_name = validate_name(form.last_name(), "last name")?;
    let phone = validate_phone(form.phone())?;
    let birth_date = parse_optional_date(form.birth_date())?;

    let updated = Athlete::new(
        athlete_id,
        first_name,
        last_name,
        *existing.gender(),
        phone,
        form.emergency_phone().clone(),
        form.father_name().clone(),
        birth_date,
        *existing.registration_date(),
        *existing.start_date(),
        *existing.original_days(),
    );
    dao::athlete::update_contact(connection, &updated)?;

    Ok(updated)
}

/// Apply the renewal policy and persist the new membership clock.
pub fn renew(
    connection: &mut SqliteConnection,
    athlete_id: i32,
    additional_days: i32,
    gender: &Gender,
    now: NaiveDateTime,
) -> Result<Athlete> {
    if additional_days <= 0 {
        return Err(InvalidEntitlement);
    }
    let existing = find_in_partition(connection, athlete_id, gender)?;
    let (new_start_date, new_original_days) = membership::renew(
        *existing.start_date(),
        *existing.original_days(),
        additional_days,
        now,
    );
    dao::athlete::update_membership(connection, athlete_id, new_start_date, new_original_days)?;

    Ok(Athlete::new(
        athlete_id,
        existing.first_name().clone(),
        existing.last_name().clone(),
        *existing.gender(),
        existing.phone().clone(),
        existing.emergency_phone().clone(),
        existing.father_name().clone(),
        *existing.birth_date(),
        *existing.registration_date(),
        new_start_date,
        new_original_days,
    ))
}

/// Hard delete. Returns the pre-delete snapshot so the caller can log the
/// name: the activity log's back-reference dangles once the row is gone.
pub fn delete(
    connection: &mut SqliteConnection,
    athlete_id: i32,
    gender: &Gender,
) -> Result<Athlete> {
    let existing = find_in_partition(connection, athlete_id, gender)?;
    dao::athlete::delete(connection, athlete_id)?;

    Ok(existing)
}

fn find_in_partition(
    connection: &mut SqliteConnection,
    athlete_id: i32,
    gender: &Gender,
) -> Result<Athlete> {
    dao::athlete::find_by_id(connection, athlete_id)?
        .filter(|athlete| athlete.gender() == gender)
        .ok_or(NotFound(athlete_id))
}

pub fn summarize(athlete: Athlete, now: NaiveDateTime) -> AthleteSummary {
    let status = MembershipStatus::compute(*athlete.start_date(), *athlete.original_days(), now);
    let start_date_display = calendar::display_date(*athlete.start_date());
    let end_date_display = calendar::display_date(*status.end_date());

    AthleteSummary::new(athlete, status, start_date_display, end_date_display)
}

/// Uniform rejection sampling over the 4-digit space. Collisions stay rare
/// while the registry holds a few hundred athletes; the attempt budget only
/// trips once the space is close to saturated.
fn draw_free_id(connection: &mut SqliteConnection) -> Result<i32> {
    for _ in 0..MAX_ID_DRAW_ATTEMPTS {
        let candidate = rand::rng().random_range(ID_SPACE);
        if !dao::athlete::exists(connection, candidate)? {
            return Ok(candidate);
        }
    }

    Err(IdPoolExhausted)
}

fn validate_name(value: &str, field: &'static str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        Err(MissingField(field))
    } else {
        Ok(value.to_owned())
    }
}

fn validate_phone(value: &str) -> Result<String> {
    let value = value.trim();
    if PHONE_NUMBER_PATTERN.is_match(value) {
        Ok(value.to_owned())
    } else {
        Err(InvalidPhoneNumber(value.to_owned()))
    }
}

fn parse_optional_date(value: &Option<String>) -> Result<Option<NaiveDate>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Ok(Some(calendar::parse_date_input(value)?)),
    }
}
