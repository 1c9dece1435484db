use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The contact/identity fields an admin may edit in place.
/// The membership clock (`start_date`, `original_days`) is deliberately
/// absent: it is only reachable through the renewal operation.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct AthleteUpdate {
    first_name: String,
    last_name: String,
    phone: String,
    emergency_phone: Option<String>,
    father_name: Option<String>,
    birth_date: Option<String>,
}

impl AthleteUpdate {
    pub fn new(
        first_name: String,
        last_name: String,
        phone: String,
        emergency_phone: Option<String>,
        father_name: Option<String>,
        birth_date: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            phone,
            emergency_phone,
            father_name,
            birth_date,
        }
    }
}
