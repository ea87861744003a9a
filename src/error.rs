//! Error types for input validation and data loading
//!
//! The arithmetic itself never fails: degenerate inputs produce degenerate
//! numbers. These errors come from the opt-in `validate()` checks and from
//! the CSV loaders.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Neither a monthly salary nor an hourly rate was supplied
    #[error("compensation needs a monthly salary or an hourly rate")]
    MissingCompensation,

    #[error("{field} must be positive, got {value}")]
    NonPositiveCompensation { field: &'static str, value: f64 },

    #[error("{field} percentage must be within 0..=100, got {value}")]
    InvalidPercentage { field: &'static str, value: f64 },

    /// Savings + investment + spending did not add up to 100
    #[error("allocation percentages must sum to 100, got {total}")]
    AllocationTotal { total: f64 },

    #[error("due day must be within 1..=31, got {0}")]
    InvalidDueDay(u32),

    #[error("exchange rate for {pair} must be finite and positive, got {rate}")]
    InvalidRate { pair: String, rate: f64 },

    /// Currency pair text that is not of the form `BASE/QUOTE`
    #[error("invalid currency pair '{0}', expected BASE/QUOTE")]
    InvalidPair(String),

    #[error("unknown value '{value}' for {field}")]
    UnknownField { field: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
