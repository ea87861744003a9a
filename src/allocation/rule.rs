//! Percentage-based splitting of earned amounts
//!
//! No rounding is applied: each share is `amount * percentage / 100` in plain
//! floating point, and the shares only add back up to `amount` when the
//! percentages sum to 100.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

const PERCENT_TOLERANCE: f64 = 1e-9;

/// How incoming earnings are split across savings, investment and spending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationRule {
    pub savings_percentage: f64,
    pub investment_percentage: f64,
    pub spending_percentage: f64,
}

impl AllocationRule {
    pub fn new(savings_percentage: f64, investment_percentage: f64, spending_percentage: f64) -> Self {
        Self {
            savings_percentage,
            investment_percentage,
            spending_percentage,
        }
    }

    /// Rule whose spending share is the complement of the other two
    pub fn with_complement(savings_percentage: f64, investment_percentage: f64) -> Self {
        Self::new(
            savings_percentage,
            investment_percentage,
            100.0 - savings_percentage - investment_percentage,
        )
    }

    pub fn total_percentage(&self) -> f64 {
        self.savings_percentage + self.investment_percentage + self.spending_percentage
    }

    /// Each percentage within 0..=100 and the three summing to 100
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("savings", self.savings_percentage),
            ("investment", self.investment_percentage),
            ("spending", self.spending_percentage),
        ];
        for (field, value) in fields {
            if !(0.0..=100.0).contains(&value) {
                return Err(EngineError::InvalidPercentage { field, value });
            }
        }

        let total = self.total_percentage();
        if (total - 100.0).abs() > PERCENT_TOLERANCE {
            return Err(EngineError::AllocationTotal { total });
        }
        Ok(())
    }
}

impl Default for AllocationRule {
    fn default() -> Self {
        Self::with_complement(10.0, 20.0) // 10% savings, 20% investment, 70% spending
    }
}

/// Result of applying an [`AllocationRule`] to an amount
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AllocationSplit {
    pub savings: f64,
    pub investment: f64,
    pub spending: f64,
}

impl AllocationSplit {
    pub fn total(&self) -> f64 {
        self.savings + self.investment + self.spending
    }

    /// Component-wise sum, for accumulating splits over many earnings
    pub fn accumulate(&self, other: &AllocationSplit) -> AllocationSplit {
        AllocationSplit {
            savings: self.savings + other.savings,
            investment: self.investment + other.investment,
            spending: self.spending + other.spending,
        }
    }
}

/// Split `amount` by the rule's percentages
pub fn apply_allocation_rules(amount: f64, rule: &AllocationRule) -> AllocationSplit {
    AllocationSplit {
        savings: amount * rule.savings_percentage / 100.0,
        investment: amount * rule.investment_percentage / 100.0,
        spending: amount * rule.spending_percentage / 100.0,
    }
}
