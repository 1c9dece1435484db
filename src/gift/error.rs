use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GiftError {
    #[error("The prize weights must sum to 100%, current sum: {0}%")]
    InvalidDistribution(u32),
}
