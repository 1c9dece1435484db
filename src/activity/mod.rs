use crate::database::dao;
use crate::database::error::DatabaseError;
use chrono::NaiveDateTime;
use diesel::SqliteConnection;
use dto::activity::{ActivityAction, ActivityLogView};
use std::collections::HashMap;

/// What a deleted athlete's back-reference renders as.
const DANGLING_REFERENCE: &str = "N/A";

type Result<T, E = DatabaseError> = std::result::Result<T, E>;

/// Append one audit-trail entry. Every mutating operation calls this after
/// its own write committed.
pub fn record(
    connection: &mut SqliteConnection,
    now: NaiveDateTime,
    action: ActivityAction,
    details: &str,
    athlete_id: Option<i32>,
) -> Result<()> {
    dao::activity_log::insert(connection, now, action, details, athlete_id)?;

    Ok(())
}

/// The trail, newest first, optionally filtered.
///
/// The two filter groups combine with AND semantics: the text filter is an
/// OR'd substring match over the details and the resolved athlete name, the
/// action filter is an exact match.
pub fn query(
    connection: &mut SqliteConnection,
    text_filter: Option<&str>,
    action_filter: Option<ActivityAction>,
) -> Result<Vec<ActivityLogView>> {
    let entries = dao::activity_log::find_all(connection)?;

    let mut resolved_names: HashMap<i32, String> = HashMap::new();
    for entry in &entries {
        if let Some(athlete_id) = *entry.athlete_id() {
            if !resolved_names.contains_key(&athlete_id) {
                let name = dao::athlete::find_by_id(connection, athlete_id)?
                    .map(|athlete| athlete.full_name())
                    .unwrap_or_else(|| DANGLING_REFERENCE.to_owned());
                resolved_names.insert(athlete_id, name);
            }
        }
    }

    let views = entries
        .into_iter()
        .map(|entry| {
            let athlete_name = entry
                .athlete_id()
                .and_then(|athlete_id| resolved_names.get(&athlete_id).cloned())
                .unwrap_or_else(|| DANGLING_REFERENCE.to_owned());
            ActivityLogView::new(entry, athlete_name)
        })
        .filter(|view| {
            let action_matches = action_filter
                .map(|action| action == *view.entry().action())
                .unwrap_or(true);
            let text_matches = text_filter
                .map(|text| {
                    view.entry().details().contains(text) || view.athlete_name().contains(text)
                })
                .unwrap_or(true);

            action_matches && text_matches
        })
        .collect();

    Ok(views)
}
