//! Investment holdings and savings accounts
//!
//! Crypto holdings are valued through the rate table; other holdings keep
//! whatever current value was last recorded for them.

use serde::{Deserialize, Serialize};

use super::progress::goal_progress;
use crate::currency::{RateTable, DEFAULT_CURRENCY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    Crypto,
    Stocks,
    AptosStake,
}

/// A position bought with part of the investment allocation.
///
/// `amount` is the cost in VND and `purchase_price` the VND price of one
/// unit at purchase time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    pub kind: InvestmentKind,
    pub symbol: String,
    pub amount: f64,
    pub purchase_price: f64,
    pub current_value: Option<f64>,
}

impl Investment {
    /// Buy `units` of a crypto asset at the table's current price
    pub fn buy_crypto(id: impl Into<String>, symbol: &str, units: f64, rates: &RateTable) -> Self {
        let unit_price = unit_price(rates, symbol);
        let amount = units * unit_price;
        Investment {
            id: id.into(),
            kind: InvestmentKind::Crypto,
            symbol: symbol.to_string(),
            amount,
            purchase_price: unit_price,
            current_value: Some(amount),
        }
    }

    /// Units held, zero when the purchase price is unknown
    pub fn units(&self) -> f64 {
        if self.purchase_price > 0.0 {
            self.amount / self.purchase_price
        } else {
            0.0
        }
    }

    /// Recorded value, falling back to cost when none (or zero) is recorded
    pub fn value(&self) -> f64 {
        match self.current_value {
            Some(v) if v != 0.0 && !v.is_nan() => v,
            _ => self.amount,
        }
    }

    /// Re-price a crypto holding from `rates`. Other kinds are left alone.
    pub fn revalue(&mut self, rates: &RateTable) {
        if self.kind == InvestmentKind::Crypto {
            self.current_value = Some(rates.convert(self.units(), &self.symbol, DEFAULT_CURRENCY));
        }
    }
}

/// VND price of one unit of `symbol`
pub fn unit_price(rates: &RateTable, symbol: &str) -> f64 {
    rates.convert(1.0, symbol, DEFAULT_CURRENCY)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PortfolioTotals {
    pub total_value: f64,
    pub total_invested: f64,
    pub gain_loss: f64,
}

pub fn portfolio_totals(investments: &[Investment]) -> PortfolioTotals {
    let total_value: f64 = investments.iter().map(Investment::value).sum();
    let total_invested: f64 = investments.iter().map(|i| i.amount).sum();

    PortfolioTotals {
        total_value,
        total_invested,
        gain_loss: total_value - total_invested,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    pub id: String,
    pub account_name: String,
    pub balance: f64,
    pub target_amount: Option<f64>,
}

impl SavingsAccount {
    /// Goal completion in percent, `None` without a positive target
    pub fn progress(&self) -> Option<f64> {
        self.target_amount
            .filter(|t| *t > 0.0)
            .map(|t| goal_progress(self.balance, t))
    }
}

pub fn total_savings(accounts: &[SavingsAccount]) -> f64 {
    accounts.iter().map(|a| a.balance).sum()
}
