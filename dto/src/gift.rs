use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A prize with its draw weight, in percent of the whole table.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Gift {
    name: String,
    weight: u8,
    emoji: String,
}

impl Gift {
    pub fn new(name: String, weight: u8, emoji: String) -> Self {
        Self {
            name,
            weight,
            emoji,
        }
    }

    pub fn full_display(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

/// The outcome of one draw.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct DrawnGift {
    name: String,
    emoji: String,
    full_display: String,
}

impl From<&Gift> for DrawnGift {
    fn from(gift: &Gift) -> Self {
        Self {
            name: gift.name.clone(),
            emoji: gift.emoji.clone(),
            full_display: gift.full_display(),
        }
    }
}
