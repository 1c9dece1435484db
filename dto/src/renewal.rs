use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Renewal {
    additional_days: i32,
}

impl Renewal {
    pub fn new(additional_days: i32) -> Self {
        Self { additional_days }
    }
}
