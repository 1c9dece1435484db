use crate::gender::Gender;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The registration form. Date fields are raw strings: the caller may type
/// them in either calendar, so parsing happens in the registry, not here.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct AthleteToRegister {
    first_name: String,
    last_name: String,
    gender: Gender,
    phone: String,
    emergency_phone: Option<String>,
    father_name: Option<String>,
    birth_date: Option<String>,
    start_date: Option<String>,
    original_days: i32,
}

impl AthleteToRegister {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        gender: Gender,
        phone: String,
        emergency_phone: Option<String>,
        father_name: Option<String>,
        birth_date: Option<String>,
        start_date: Option<String>,
        original_days: i32,
    ) -> Self {
        Self {
            first_name,
            last_name,
            gender,
            phone,
            emergency_phone,
            father_name,
            birth_date,
            start_date,
            original_days,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn ali_rezai_form() -> AthleteToRegister {
        AthleteToRegister::new(
            "Ali".to_owned(),
            "Rezai".to_owned(),
            Gender::Male,
            "9123456789".to_owned(),
            None,
            None,
            None,
            None,
            30,
        )
    }
}
