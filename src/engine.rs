//! Engine for summarizing payroll streams against a fixed rate table
//!
//! Holds one immutable [`RateTable`] and a [`SummaryConfig`], so many streams
//! can be summarized without reloading rates. The engine has no interior
//! mutability and is shared freely across rayon workers.

use crate::allocation::{apply_allocation_rules, AllocationRule, AllocationSplit};
use crate::compensation::{
    daily_earnings, earnings_per_second, monthly_earnings, CompensationMode, PayrollStream,
};
use crate::currency::{Conversion, RateTable, DEFAULT_CURRENCY};
use crate::error::Result;
use crate::growth::{compound_interest, DEFAULT_COMPOUNDS_PER_YEAR};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for stream summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Annual growth rate applied to saved amounts (fraction, 0.06 = 6%)
    pub savings_annual_rate: f64,

    /// Years the annual savings are grown for
    pub projection_years: u32,

    /// Currency monthly earnings are also reported in
    pub display_currency: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            savings_annual_rate: 0.06,
            projection_years: 1,
            display_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Derived figures for one payroll stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamSummary {
    pub stream_id: String,
    pub employer_name: String,
    pub mode: Option<CompensationMode>,
    pub earnings_per_second: f64,
    pub daily_earnings: f64,
    pub monthly_earnings: f64,
    /// Monthly earnings converted to the display currency
    pub monthly_display: f64,
    pub monthly_allocation: AllocationSplit,
    /// Twelve months of savings grown over the projection horizon
    pub projected_savings: f64,
}

#[derive(Debug, Clone)]
pub struct FinancialEngine {
    rates: RateTable,
    config: SummaryConfig,
}

impl FinancialEngine {
    /// Engine over the hardcoded rate snapshot
    pub fn new() -> Self {
        Self::with_rates(RateTable::snapshot())
    }

    /// Engine with rates loaded from data/exchange_rates.csv
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_rates(RateTable::from_csv()?))
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self::with_rates(RateTable::from_csv_path(path)?))
    }

    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            rates,
            config: SummaryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SummaryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> f64 {
        self.rates.convert(amount, from, to)
    }

    pub fn quote(&self, amount: f64, from: &str, to: &str) -> Conversion {
        self.rates.quote(amount, from, to)
    }

    /// Rates, monthly allocation and projected savings for one stream
    pub fn summarize_stream(&self, stream: &PayrollStream, rule: &AllocationRule) -> StreamSummary {
        let compensation = &stream.compensation;
        let monthly = monthly_earnings(compensation);
        let allocation = apply_allocation_rules(monthly, rule);
        let monthly_display = if self.config.display_currency == DEFAULT_CURRENCY {
            monthly
        } else {
            self.convert(monthly, DEFAULT_CURRENCY, &self.config.display_currency)
        };

        StreamSummary {
            stream_id: stream.id.clone(),
            employer_name: stream.employer_name.clone(),
            mode: compensation.mode(),
            earnings_per_second: earnings_per_second(compensation),
            daily_earnings: daily_earnings(compensation),
            monthly_earnings: monthly,
            monthly_display,
            monthly_allocation: allocation,
            projected_savings: compound_interest(
                allocation.savings * 12.0,
                self.config.savings_annual_rate,
                self.config.projection_years as f64,
                DEFAULT_COMPOUNDS_PER_YEAR,
            ),
        }
    }

    /// Summarize many streams in parallel, preserving input order
    pub fn summarize_batch(&self, streams: &[PayrollStream], rule: &AllocationRule) -> Vec<StreamSummary> {
        streams
            .par_iter()
            .map(|stream| self.summarize_stream(stream, rule))
            .collect()
    }

    /// Sum of the monthly allocations over a batch of summaries
    pub fn total_allocation(summaries: &[StreamSummary]) -> AllocationSplit {
        summaries
            .iter()
            .fold(AllocationSplit::default(), |acc, s| acc.accumulate(&s.monthly_allocation))
    }
}

impl Default for FinancialEngine {
    fn default() -> Self {
        Self::new()
    }
}
