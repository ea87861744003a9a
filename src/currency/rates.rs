//! Static exchange-rate table and currency conversion
//!
//! Conversion tries three tiers in a fixed order:
//! 1. the direct pair `from/to` (multiply)
//! 2. the inverse pair `to/from` (divide)
//! 3. a bridge through USD, each leg using the same direct/inverse lookup
//!
//! A bridge leg with no rate passes the amount through unchanged. Zero and
//! NaN rates count as missing.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Currency every bridged conversion passes through
pub const BRIDGE_CURRENCY: &str = "USD";

/// Ordered currency pair; a rate on `BASE/QUOTE` is the QUOTE price of one BASE
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: String,
    pub quote: String,
}

impl CurrencyPair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    pub fn inverse(&self) -> Self {
        Self::new(self.quote.clone(), self.base.clone())
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((base, quote)) if !base.trim().is_empty() && !quote.trim().is_empty() => {
                Ok(Self::new(base.trim(), quote.trim()))
            }
            _ => Err(EngineError::InvalidPair(s.to_string())),
        }
    }
}

/// Which tier produced a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionPath {
    Direct,
    Inverse,
    UsdBridge,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub amount: f64,
    pub path: ConversionPath,
}

/// Immutable mapping from currency pairs to exchange rates
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: HashMap<CurrencyPair, f64>,
}

fn usable(rate: f64) -> bool {
    rate != 0.0 && !rate.is_nan()
}

impl RateTable {
    /// Table with no rates: every conversion bridges and passes through
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// The hardcoded market snapshot
    pub fn snapshot() -> Self {
        Self::empty()
            .with_rate(CurrencyPair::new("BTC", "USD"), 45_000.0)
            .with_rate(CurrencyPair::new("ETH", "USD"), 3_000.0)
            .with_rate(CurrencyPair::new("APT", "USD"), 12.0)
            .with_rate(CurrencyPair::new("USD", "VND"), 24_000.0)
    }

    pub fn with_rate(mut self, pair: CurrencyPair, rate: f64) -> Self {
        self.rates.insert(pair, rate);
        self
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Pairs and rates sorted by pair
    pub fn entries(&self) -> Vec<(&CurrencyPair, f64)> {
        let mut entries: Vec<_> = self.rates.iter().map(|(pair, rate)| (pair, *rate)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Stored rate for exactly `from/to`, ignoring unusable values
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.rates
            .get(&CurrencyPair::new(from, to))
            .copied()
            .filter(|rate| usable(*rate))
    }

    /// Direct-then-inverse lookup for a single leg
    fn leg(&self, amount: f64, from: &str, to: &str) -> Option<(f64, ConversionPath)> {
        if let Some(rate) = self.rate(from, to) {
            Some((amount * rate, ConversionPath::Direct))
        } else {
            self.rate(to, from)
                .map(|rate| (amount / rate, ConversionPath::Inverse))
        }
    }

    fn bridge_leg(&self, amount: f64, from: &str, to: &str) -> f64 {
        match self.leg(amount, from, to) {
            Some((converted, _)) => converted,
            None => {
                if from != to {
                    log::warn!("No rate for {}/{}, passing amount through unchanged", from, to);
                }
                amount
            }
        }
    }

    /// Convert and report which tier was used
    pub fn quote(&self, amount: f64, from: &str, to: &str) -> Conversion {
        if let Some((converted, path)) = self.leg(amount, from, to) {
            return Conversion {
                amount: converted,
                path,
            };
        }

        log::debug!("No {}/{} rate, bridging through {}", from, to, BRIDGE_CURRENCY);
        let usd = self.bridge_leg(amount, from, BRIDGE_CURRENCY);
        Conversion {
            amount: self.bridge_leg(usd, BRIDGE_CURRENCY, to),
            path: ConversionPath::UsdBridge,
        }
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> f64 {
        self.quote(amount, from, to).amount
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::snapshot()
    }
}

static DEFAULT_RATES: OnceLock<RateTable> = OnceLock::new();

/// Process-wide snapshot table, built on first use and never mutated
pub fn default_rates() -> &'static RateTable {
    DEFAULT_RATES.get_or_init(RateTable::snapshot)
}

/// Convert using the process-wide snapshot table
pub fn convert(amount: f64, from: &str, to: &str) -> f64 {
    default_rates().convert(amount, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_pair() {
        let table = RateTable::snapshot();
        let conversion = table.quote(1.0, "BTC", "USD");
        assert_eq!(conversion.amount, 45_000.0);
        assert_eq!(conversion.path, ConversionPath::Direct);
        assert_eq!(convert(2.0, "USD", "VND"), 48_000.0);
    }

    #[test]
    fn test_inverse_pair() {
        let table = RateTable::snapshot();
        let conversion = table.quote(1.0, "USD", "BTC");
        assert_eq!(conversion.amount, 1.0 / 45_000.0);
        assert_eq!(conversion.path, ConversionPath::Inverse);
        assert_eq!(convert(24_000.0, "VND", "USD"), 1.0);
    }

    #[test]
    fn test_usd_bridge() {
        let table = RateTable::snapshot();
        let conversion = table.quote(1.0, "BTC", "VND");
        assert_eq!(conversion.amount, 45_000.0 * 24_000.0);
        assert_eq!(conversion.path, ConversionPath::UsdBridge);

        assert_relative_eq!(convert(1.0, "ETH", "BTC"), 3_000.0 / 45_000.0);
        assert_relative_eq!(convert(1.0, "VND", "APT"), 1.0 / 24_000.0 / 12.0);
    }

    #[test]
    fn test_direct_wins_over_bridge() {
        let table = RateTable::snapshot().with_rate(CurrencyPair::new("BTC", "VND"), 1_000_000_000.0);
        let conversion = table.quote(1.0, "BTC", "VND");
        assert_eq!(conversion.amount, 1_000_000_000.0);
        assert_eq!(conversion.path, ConversionPath::Direct);
    }

    #[test]
    fn test_direct_wins_over_inverse() {
        let table = RateTable::empty()
            .with_rate(CurrencyPair::new("AAA", "BBB"), 2.0)
            .with_rate(CurrencyPair::new("BBB", "AAA"), 4.0);
        assert_eq!(table.convert(10.0, "AAA", "BBB"), 20.0);
        assert_eq!(table.convert(10.0, "BBB", "AAA"), 40.0);
    }

    #[test]
    fn test_zero_rate_is_skipped() {
        let table = RateTable::empty()
            .with_rate(CurrencyPair::new("BTC", "USD"), 0.0)
            .with_rate(CurrencyPair::new("USD", "BTC"), 0.5);
        let conversion = table.quote(1.0, "BTC", "USD");
        assert_eq!(conversion.amount, 2.0);
        assert_eq!(conversion.path, ConversionPath::Inverse);
    }

    #[test]
    fn test_unknown_currencies_pass_through() {
        let table = RateTable::snapshot();
        // Unknown source is assumed to already be USD
        assert_eq!(table.convert(5.0, "XYZ", "VND"), 120_000.0);
        // Unknown target leaves the USD amount as-is
        assert_eq!(table.convert(1.0, "BTC", "XYZ"), 45_000.0);
        assert_eq!(table.convert(7.0, "USD", "USD"), 7.0);
        assert_eq!(RateTable::empty().convert(3.0, "VND", "BTC"), 3.0);
    }

    #[test]
    fn test_pair_parse_and_display() {
        let pair: CurrencyPair = "BTC/USD".parse().unwrap();
        assert_eq!(pair, CurrencyPair::new("BTC", "USD"));
        assert_eq!(pair.to_string(), "BTC/USD");
        assert_eq!(pair.inverse().to_string(), "USD/BTC");
        assert!("BTCUSD".parse::<CurrencyPair>().is_err());
        assert!("/USD".parse::<CurrencyPair>().is_err());
    }

    #[test]
    fn test_snapshot_entries() {
        let table = RateTable::default();
        assert_eq!(table.len(), 4);
        let pairs: Vec<String> = table.entries().iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(pairs, vec!["APT/USD", "BTC/USD", "ETH/USD", "USD/VND"]);
        assert!(std::ptr::eq(default_rates(), default_rates()));
    }
}
