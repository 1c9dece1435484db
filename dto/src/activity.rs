use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Every mutating operation appends exactly one of these.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    Registration,
    Update,
    Renewal,
    Deletion,
    Login,
    CheckIn,
    CheckOut,
}

impl Display for ActivityAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ActivityAction::Registration => "REGISTRATION",
            ActivityAction::Update => "UPDATE",
            ActivityAction::Renewal => "RENEWAL",
            ActivityAction::Deletion => "DELETION",
            ActivityAction::Login => "LOGIN",
            ActivityAction::CheckIn => "CHECK_IN",
            ActivityAction::CheckOut => "CHECK_OUT",
        };
        write!(f, "{label}")
    }
}

impl FromStr for ActivityAction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "REGISTRATION" => Ok(ActivityAction::Registration),
            "UPDATE" => Ok(ActivityAction::Update),
            "RENEWAL" => Ok(ActivityAction::Renewal),
            "DELETION" => Ok(ActivityAction::Deletion),
            "LOGIN" => Ok(ActivityAction::Login),
            "CHECK_IN" => Ok(ActivityAction::CheckIn),
            "CHECK_OUT" => Ok(ActivityAction::CheckOut),
            _ => Err(format!("Unknown activity action: {value}")),
        }
    }
}

/// An immutable audit-trail row. The athlete back-reference is weak: the
/// athlete may have been deleted since.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct ActivityLogEntry {
    id: i32,
    timestamp: NaiveDateTime,
    action: ActivityAction,
    details: String,
    athlete_id: Option<i32>,
}

impl ActivityLogEntry {
    pub fn new(
        id: i32,
        timestamp: NaiveDateTime,
        action: ActivityAction,
        details: String,
        athlete_id: Option<i32>,
    ) -> Self {
        Self {
            id,
            timestamp,
            action,
            details,
            athlete_id,
        }
    }
}

/// An entry resolved for display: a dangling athlete reference renders as
/// "N/A".
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct ActivityLogView {
    entry: ActivityLogEntry,
    athlete_name: String,
}

impl ActivityLogView {
    pub fn new(entry: ActivityLogEntry, athlete_name: String) -> Self {
        Self {
            entry,
            athlete_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        action = {ActivityAction::Registration, ActivityAction::CheckIn, ActivityAction::CheckOut, ActivityAction::Login}
    )]
    fn should_round_trip_through_display(action: ActivityAction) {
        assert_eq!(Ok(action), ActivityAction::from_str(&action.to_string()));
    }

    #[test]
    fn should_fail_to_parse_unknown_action() {
        assert!(ActivityAction::from_str("CHECKIN").is_err());
    }
}
