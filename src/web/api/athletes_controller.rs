use crate::notification::{NotificationIntent, NotificationQueue};
use crate::registry;
use crate::web::api::{DbPool, get_connection, log_activity, now};
use crate::web::notice::{self, Notice, NoticeResponse};
use crate::web::session::AdminSession;
use dto::activity::ActivityAction;
use dto::athlete_summary::AthleteSummary;
use dto::athlete_to_register::AthleteToRegister;
use dto::athlete_update::AthleteUpdate;
use dto::renewal::Renewal;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

/// Register a new athlete into the admin's own partition (whatever gender
/// the form claims), log the mutation and queue the welcome SMS.
#[post("/athletes", format = "application/json", data = "<form>")]
pub async fn register(
    pool: &State<DbPool>,
    queue: &State<NotificationQueue>,
    session: AdminSession,
    form: Json<AthleteToRegister>,
) -> Result<(Status, Json<AthleteSummary>), NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let form = form.into_inner();
    let form = AthleteToRegister::new(
        form.first_name().clone(),
        form.last_name().clone(),
        *session.gender(),
        form.phone().clone(),
        form.emergency_phone().clone(),
        form.father_name().clone(),
        form.birth_date().clone(),
        form.start_date().clone(),
        *form.original_days(),
    );

    let athlete =
        registry::register(&mut connection, &form, now()).map_err(notice::registry_error)?;
    log_activity(
        &mut connection,
        ActivityAction::Registration,
        &format!("Registered {} ({})", athlete.full_name(), athlete.id()),
        Some(*athlete.id()),
    );
    queue.enqueue(NotificationIntent::WelcomeSms {
        first_name: athlete.first_name().clone(),
        phone: athlete.phone().clone(),
    });

    Ok((Status::Created, Json(registry::summarize(athlete, now()))))
}

/// The partition's athletes, newest first; with a query, only the matches.
#[get("/athletes?<query>")]
pub async fn list_athletes(
    pool: &State<DbPool>,
    session: AdminSession,
    query: Option<String>,
) -> Result<Json<Vec<AthleteSummary>>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let summaries = match query {
        Some(query) => {
            let athletes = registry::search(&mut connection, &query, session.gender())
                .map_err(notice::registry_error)?;
            registry::summarize_all(athletes, now())
        }
        None => registry::list(&mut connection, session.gender(), now())
            .map_err(notice::registry_error)?,
    };

    Ok(Json(summaries))
}

#[get("/athletes/<athlete_id>")]
pub async fn get_athlete(
    pool: &State<DbPool>,
    session: AdminSession,
    athlete_id: i32,
) -> Result<Json<AthleteSummary>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let summary = registry::find(&mut connection, athlete_id, session.gender(), now())
        .map_err(notice::registry_error)?;

    Ok(Json(summary))
}

#[put("/athletes/<athlete_id>", format = "application/json", data = "<form>")]
pub async fn update_athlete(
    pool: &State<DbPool>,
    session: AdminSession,
    athlete_id: i32,
    form: Json<AthleteUpdate>,
) -> Result<Json<AthleteSummary>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let athlete = registry::update(&mut connection, athlete_id, &form, session.gender())
        .map_err(notice::registry_error)?;
    log_activity(
        &mut connection,
        ActivityAction::Update,
        &format!("Updated {} ({athlete_id})", athlete.full_name()),
        Some(athlete_id),
    );

    Ok(Json(registry::summarize(athlete, now())))
}

/// The only path that moves the membership clock.
#[post(
    "/athletes/<athlete_id>/renewal",
    format = "application/json",
    data = "<renewal>"
)]
pub async fn renew_athlete(
    pool: &State<DbPool>,
    session: AdminSession,
    athlete_id: i32,
    renewal: Json<Renewal>,
) -> Result<Json<AthleteSummary>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let additional_days = *renewal.additional_days();
    let athlete = registry::renew(
        &mut connection,
        athlete_id,
        additional_days,
        session.gender(),
        now(),
    )
    .map_err(notice::registry_error)?;
    log_activity(
        &mut connection,
        ActivityAction::Renewal,
        &format!(
            "Renewed {} ({athlete_id}) by {additional_days} days",
            athlete.full_name()
        ),
        Some(athlete_id),
    );

    Ok(Json(registry::summarize(athlete, now())))
}

/// Hard delete. The log entry carries the name snapshot; its back-reference
/// dangles from here on.
#[delete("/athletes/<athlete_id>")]
pub async fn delete_athlete(
    pool: &State<DbPool>,
    session: AdminSession,
    athlete_id: i32,
) -> Result<Json<Notice>, NoticeResponse> {
    let mut connection = get_connection(pool)?;
    let snapshot = registry::delete(&mut connection, athlete_id, session.gender())
        .map_err(notice::registry_error)?;
    log_activity(
        &mut connection,
        ActivityAction::Deletion,
        &format!("Deleted {} ({athlete_id})", snapshot.full_name()),
        Some(athlete_id),
    );

    Ok(Json(Notice::success(format!(
        "{} was removed from the registry.",
        snapshot.full_name()
    ))))
}
