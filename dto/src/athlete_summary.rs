use crate::athlete::Athlete;
use crate::membership_status::MembershipStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An athlete joined with their computed membership status, ready for display.
/// The `*_display` fields carry the solar-calendar rendition of the dates.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct AthleteSummary {
    #[serde(flatten)]
    athlete: Athlete,
    status: MembershipStatus,
    start_date_display: String,
    end_date_display: String,
}

impl AthleteSummary {
    pub fn new(
        athlete: Athlete,
        status: MembershipStatus,
        start_date_display: String,
        end_date_display: String,
    ) -> Self {
        Self {
            athlete,
            status,
            start_date_display,
            end_date_display,
        }
    }
}
