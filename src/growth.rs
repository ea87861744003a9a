//! Compound growth projection for savings and investments
//!
//! Rates are fractional (0.05 = 5%). Callers holding whole-number
//! percentages convert with [`percent_to_rate`] first.

use serde::{Deserialize, Serialize};

/// Monthly compounding
pub const DEFAULT_COMPOUNDS_PER_YEAR: u32 = 12;

/// Convert a whole-number percentage (6.0) to a fractional rate (0.06)
pub fn percent_to_rate(percent: f64) -> f64 {
    percent / 100.0
}

/// Discrete compound interest:
/// `principal * (1 + annual_rate / n) ^ (n * years)`
///
/// No validation: negative principals or times give the formula's value.
pub fn compound_interest(principal: f64, annual_rate: f64, years: f64, compounds_per_year: u32) -> f64 {
    let n = compounds_per_year as f64;
    principal * (1.0 + annual_rate / n).powf(n * years)
}

/// One year-end point of a growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    pub balance: f64,
    /// Cumulative interest since year 0
    pub interest_earned: f64,
}

/// Balance at each whole year from 0 through `years`
pub fn project_growth(
    principal: f64,
    annual_rate: f64,
    years: u32,
    compounds_per_year: u32,
) -> Vec<GrowthPoint> {
    (0..=years)
        .map(|year| {
            let balance = compound_interest(principal, annual_rate, year as f64, compounds_per_year);
            GrowthPoint {
                year,
                balance,
                interest_earned: balance - principal,
            }
        })
        .collect()
}
