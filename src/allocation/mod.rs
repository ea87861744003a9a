//! Allocation rules, savings-goal tracking and investment holdings

mod rule;
mod progress;
mod portfolio;

pub use rule::{apply_allocation_rules, AllocationRule, AllocationSplit};
pub use progress::{goal_progress, remaining_to_target, target_performance};
pub use portfolio::{
    portfolio_totals, total_savings, unit_price, Investment, InvestmentKind, PortfolioTotals,
    SavingsAccount,
};
