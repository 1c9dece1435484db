use crate::gift::error::GiftError;
use crate::gift::error::GiftError::InvalidDistribution;
use dto::gift::{DrawnGift, Gift};
use rand::Rng;

pub mod error;

/// A weighted prize draw over a fixed table. The weights are percentages and
/// must sum to exactly 100.
#[derive(Debug)]
pub struct GiftLottery {
    gifts: Vec<Gift>,
}

impl GiftLottery {
    pub fn new(gifts: Vec<Gift>) -> Result<Self, GiftError> {
        let total = gifts
            .iter()
            .map(|gift| u32::from(*gift.weight()))
            .sum::<u32>();
        if total != 100 {
            return Err(InvalidDistribution(total));
        }

        Ok(Self { gifts })
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn draw(&self) -> DrawnGift {
        self.pick(rand::rng().random_range(0.0..100.0))
    }

    /// Walk the cumulative distribution. The last prize doubles as the
    /// fallback so rounding at the upper edge can't leave the draw empty.
    fn pick(&self, value: f64) -> DrawnGift {
        let mut cumulative = 0.0;
        for gift in &self.gifts {
            cumulative += f64::from(*gift.weight());
            if value <= cumulative {
                return DrawnGift::from(gift);
            }
        }

        DrawnGift::from(self.gifts.last().expect("validated non-empty table"))
    }
}

/// The prize table the gym runs its yearly draw with.
pub fn default_gifts() -> Vec<Gift> {
    vec![
        Gift::new("Premium Gym Membership (1 Year)".to_owned(), 1, "🏆".to_owned()),
        Gift::new("Personal Training Sessions (10 sessions)".to_owned(), 2, "💪".to_owned()),
        Gift::new("Sports Nutrition Package".to_owned(), 5, "🥗".to_owned()),
        Gift::new("Branded Sportswear Set".to_owned(), 10, "👕".to_owned()),
        Gift::new("Fitness Tracker Watch".to_owned(), 15, "⌚".to_owned()),
        Gift::new("Protein Supplement Pack".to_owned(), 20, "🍶".to_owned()),
        Gift::new("Gym Water Bottle".to_owned(), 25, "💧".to_owned()),
        Gift::new("Sports Towel".to_owned(), 22, "🏐".to_owned()),
    ]
}
