//! Invoice fees and payout streaming
//!
//! An approved invoice streams to the freelancer linearly over 30 days.

use serde::{Deserialize, Serialize};

/// Platform fee taken from every invoice (2%)
pub const PLATFORM_FEE_RATE: f64 = 0.02;

pub const STREAMING_PERIOD_DAYS: u32 = 30;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Gross, fee and net amounts of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvoiceQuote {
    pub gross: f64,
    pub platform_fee: f64,
    pub net: f64,
}

pub fn quote_invoice(amount: f64) -> InvoiceQuote {
    InvoiceQuote {
        gross: amount,
        platform_fee: amount * PLATFORM_FEE_RATE,
        net: amount * (1.0 - PLATFORM_FEE_RATE),
    }
}

/// Amount paid out per second while the invoice streams
pub fn streaming_rate_per_second(amount: f64) -> f64 {
    amount / (STREAMING_PERIOD_DAYS as f64 * SECONDS_PER_DAY)
}

/// Amount streamed after `ticks` one-second ticks, capped at the invoice amount
pub fn streamed_amount(amount: f64, ticks: u64) -> f64 {
    (streaming_rate_per_second(amount) * ticks as f64).min(amount)
}

/// Streamed share of the invoice, in percent
pub fn streaming_progress(amount: f64, streamed: f64) -> f64 {
    if amount > 0.0 {
        streamed / amount * 100.0
    } else {
        0.0
    }
}

/// Days left at the streaming rate until the invoice is paid out
pub fn estimated_days_remaining(amount: f64, streamed: f64) -> f64 {
    (amount - streamed) / (streaming_rate_per_second(amount) * SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quote_invoice() {
        let quote = quote_invoice(10_000_000.0);
        assert_eq!(quote.gross, 10_000_000.0);
        assert_relative_eq!(quote.platform_fee, 200_000.0, max_relative = 1e-12);
        assert_relative_eq!(quote.net, 9_800_000.0, max_relative = 1e-12);
        assert_relative_eq!(quote.platform_fee + quote.net, quote.gross, max_relative = 1e-12);
    }

    #[test]
    fn test_streaming_rate() {
        assert_relative_eq!(streaming_rate_per_second(2_592_000.0), 1.0);
    }

    #[test]
    fn test_streamed_amount_caps_at_total() {
        let amount = 2_592_000.0;
        assert_relative_eq!(streamed_amount(amount, 86_400), 86_400.0);
        assert_eq!(streamed_amount(amount, 40 * 86_400), amount);
    }

    #[test]
    fn test_progress_and_days_remaining() {
        let amount = 2_592_000.0;
        let streamed = streamed_amount(amount, 10 * 86_400);
        assert_relative_eq!(streaming_progress(amount, streamed), 100.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(estimated_days_remaining(amount, streamed), 20.0, max_relative = 1e-12);
        assert_eq!(streaming_progress(0.0, 0.0), 0.0);
    }
}
