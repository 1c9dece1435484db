use crate::gender::Gender;
use chrono::{NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A registered athlete, as persisted.
///
/// `registration_date` is the creation timestamp and never changes.
/// `start_date` and `original_days` form the membership clock: they are only
/// ever mutated through a renewal, never through a plain update.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Athlete {
    id: i32,
    first_name: String,
    last_name: String,
    gender: Gender,
    phone: String,
    emergency_phone: Option<String>,
    father_name: Option<String>,
    birth_date: Option<NaiveDate>,
    registration_date: NaiveDateTime,
    start_date: NaiveDate,
    original_days: i32,
}

impl Athlete {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        first_name: String,
        last_name: String,
        gender: Gender,
        phone: String,
        emergency_phone: Option<String>,
        father_name: Option<String>,
        birth_date: Option<NaiveDate>,
        registration_date: NaiveDateTime,
        start_date: NaiveDate,
        original_days: i32,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            gender,
            phone,
            emergency_phone,
            father_name,
            birth_date,
            registration_date,
            start_date,
            original_days,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::NaiveDate;

    pub fn ali_rezai() -> Athlete {
        Athlete::new(
            4821,
            "Ali".to_owned(),
            "Rezai".to_owned(),
            Gender::Male,
            "9123456789".to_owned(),
            None,
            None,
            NaiveDate::from_ymd_opt(1995, 4, 12),
            NaiveDate::from_ymd_opt(2026, 7, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            30,
        )
    }

    pub fn sara_ahmadi() -> Athlete {
        Athlete::new(
            7302,
            "Sara".to_owned(),
            "Ahmadi".to_owned(),
            Gender::Female,
            "9351112233".to_owned(),
            Some("9120000000".to_owned()),
            None,
            None,
            NaiveDate::from_ymd_opt(2026, 6, 15)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            90,
        )
    }

    #[test]
    fn should_concatenate_full_name() {
        assert_eq!("Ali Rezai", ali_rezai().full_name());
    }
}
