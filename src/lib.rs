//! Paystream Engine - Financial calculations for payroll streaming dashboards
//!
//! This library provides:
//! - Per-second and per-day earnings rates from salary configurations
//! - Percentage-based allocation of earnings into savings, investment and spending
//! - Compound growth projection
//! - Next due dates for recurring monthly bills
//! - Vietnamese-locale currency formatting and rate-table conversion
//! - Invoice fees, payout streaming and client ledgers
//!
//! Every calculation is a pure function of its inputs.

pub mod error;
pub mod compensation;
pub mod allocation;
pub mod growth;
pub mod bills;
pub mod currency;
pub mod invoice;
pub mod engine;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use compensation::{daily_earnings, earnings_per_second, CompensationConfig, PayrollStream};
pub use allocation::{apply_allocation_rules, AllocationRule, AllocationSplit};
pub use growth::compound_interest;
pub use bills::{next_bill_due_date, RecurringBill};
pub use currency::{convert, format_currency, RateTable};
pub use engine::{FinancialEngine, StreamSummary, SummaryConfig};
