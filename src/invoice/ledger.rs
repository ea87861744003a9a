//! Invoice records, totals and per-client ledgers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Approved,
    Streaming,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub client_name: String,
    pub client_email: String,
    pub amount: f64,
    pub description: Option<String>,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Only completed invoices count as paid
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InvoiceTotals {
    pub total_invoiced: f64,
    pub total_paid: f64,
    /// Share of invoices (by count) that are paid, in percent
    pub paid_share: f64,
}

pub fn invoice_totals(invoices: &[Invoice]) -> InvoiceTotals {
    let total_invoiced: f64 = invoices.iter().map(|i| i.amount).sum();
    let paid: Vec<&Invoice> = invoices.iter().filter(|i| i.is_paid()).collect();
    let total_paid: f64 = paid.iter().map(|i| i.amount).sum();
    let paid_share = if invoices.is_empty() {
        0.0
    } else {
        paid.len() as f64 / invoices.len() as f64 * 100.0
    };

    InvoiceTotals {
        total_invoiced,
        total_paid,
        paid_share,
    }
}

/// Aggregate of all invoices sent to one client email
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientLedger {
    pub name: String,
    pub email: String,
    pub total_invoiced: f64,
    pub total_paid: f64,
    pub invoice_count: usize,
}

impl ClientLedger {
    /// Paid share of the invoiced amount, in percent
    pub fn payment_rate(&self) -> f64 {
        if self.total_invoiced > 0.0 {
            self.total_paid / self.total_invoiced * 100.0
        } else {
            0.0
        }
    }
}

/// Group invoices by client email, in order of first appearance.
///
/// The client name comes from the first invoice seen for that email.
pub fn client_ledgers(invoices: &[Invoice]) -> Vec<ClientLedger> {
    let mut ledgers: Vec<ClientLedger> = Vec::new();

    for invoice in invoices {
        let paid = if invoice.is_paid() { invoice.amount } else { 0.0 };
        match ledgers.iter_mut().find(|c| c.email == invoice.client_email) {
            Some(ledger) => {
                ledger.total_invoiced += invoice.amount;
                ledger.total_paid += paid;
                ledger.invoice_count += 1;
            }
            None => ledgers.push(ClientLedger {
                name: invoice.client_name.clone(),
                email: invoice.client_email.clone(),
                total_invoiced: invoice.amount,
                total_paid: paid,
                invoice_count: 1,
            }),
        }
    }

    ledgers
}
