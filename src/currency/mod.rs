//! Currency formatting and conversion

mod format;
mod rates;
pub mod loader;

pub use format::{currency_symbol, format_currency, format_vnd, parse_currency, DEFAULT_CURRENCY};
pub use rates::{
    convert, default_rates, Conversion, ConversionPath, CurrencyPair, RateTable, BRIDGE_CURRENCY,
};
pub use loader::{load_rates, load_rates_from_reader, DEFAULT_RATES_PATH};
