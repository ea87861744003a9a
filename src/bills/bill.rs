//! Recurring monthly bill records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Spending category of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillCategory {
    Utilities,
    Rent,
    Internet,
    Phone,
    Insurance,
    Subscription,
    Loan,
    Other,
}

impl BillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillCategory::Utilities => "utilities",
            BillCategory::Rent => "rent",
            BillCategory::Internet => "internet",
            BillCategory::Phone => "phone",
            BillCategory::Insurance => "insurance",
            BillCategory::Subscription => "subscription",
            BillCategory::Loan => "loan",
            BillCategory::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "utilities" => Ok(BillCategory::Utilities),
            "rent" => Ok(BillCategory::Rent),
            "internet" => Ok(BillCategory::Internet),
            "phone" => Ok(BillCategory::Phone),
            "insurance" => Ok(BillCategory::Insurance),
            "subscription" => Ok(BillCategory::Subscription),
            "loan" => Ok(BillCategory::Loan),
            "other" | "" => Ok(BillCategory::Other),
            _ => Err(EngineError::UnknownField {
                field: "category",
                value: value.to_string(),
            }),
        }
    }
}

/// A bill that recurs on the same day every month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringBill {
    pub id: String,
    pub name: String,
    pub amount: f64,
    /// Day of month the bill falls due (1-31)
    pub due_day: u32,
    pub category: BillCategory,
    pub is_active: bool,
    pub auto_pay: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// One payment made against a recurring bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillPayment {
    pub id: String,
    pub bill_id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub paid_at: NaiveDateTime,
}

/// Check a due day is a calendar day-of-month.
///
/// Scheduling accepts any value, saturating past the calendar range.
/// This check is for input boundaries.
pub fn validate_due_day(due_day: u32) -> Result<u32> {
    if (1..=31).contains(&due_day) {
        Ok(due_day)
    } else {
        Err(EngineError::InvalidDueDay(due_day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(BillCategory::parse("Rent").unwrap(), BillCategory::Rent);
        assert_eq!(BillCategory::parse("").unwrap(), BillCategory::Other);
        assert!(BillCategory::parse("groceries").is_err());
        assert_eq!(BillCategory::Subscription.as_str(), "subscription");
    }

    #[test]
    fn test_validate_due_day() {
        assert_eq!(validate_due_day(1).unwrap(), 1);
        assert_eq!(validate_due_day(31).unwrap(), 31);
        assert!(matches!(validate_due_day(0), Err(EngineError::InvalidDueDay(0))));
        assert!(matches!(validate_due_day(32), Err(EngineError::InvalidDueDay(32))));
    }
}
