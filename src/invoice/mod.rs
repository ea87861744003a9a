//! Freelancer invoices: fees, payout streaming and client ledgers

mod streaming;
mod ledger;

pub use streaming::{
    estimated_days_remaining, quote_invoice, streamed_amount, streaming_progress,
    streaming_rate_per_second, InvoiceQuote, PLATFORM_FEE_RATE, STREAMING_PERIOD_DAYS,
};
pub use ledger::{client_ledgers, invoice_totals, ClientLedger, Invoice, InvoiceStatus, InvoiceTotals};
