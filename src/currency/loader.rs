//! CSV-based exchange-rate loader
//!
//! Expects a `pair,rate` header, one `BASE/QUOTE` pair per row.

use super::rates::{CurrencyPair, RateTable};
use crate::error::{EngineError, Result};
use std::path::Path;

/// Default path to the exchange-rate file
pub const DEFAULT_RATES_PATH: &str = "data/exchange_rates.csv";

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    pair: String,
    rate: f64,
}

/// Load a rate table from any reader
pub fn load_rates_from_reader<R: std::io::Read>(reader: R) -> Result<RateTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = RateTable::empty();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let pair: CurrencyPair = row.pair.parse()?;

        if !row.rate.is_finite() || row.rate <= 0.0 {
            return Err(EngineError::InvalidRate {
                pair: pair.to_string(),
                rate: row.rate,
            });
        }
        table = table.with_rate(pair, row.rate);
    }

    Ok(table)
}

/// Load a rate table from a CSV file
pub fn load_rates(path: &Path) -> Result<RateTable> {
    let file = std::fs::File::open(path)?;
    let table = load_rates_from_reader(file)?;
    log::info!("Loaded {} exchange rates from {}", table.len(), path.display());
    Ok(table)
}

impl RateTable {
    /// Load rates from the default location (data/exchange_rates.csv)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load rates from a specific CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        load_rates(path)
    }
}
