//! Monthly bill totals, the upcoming-bills list and payment history

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::bill::{BillPayment, PaymentStatus, RecurringBill};
use super::schedule::{days_until_due, next_bill_due_date};

/// Number of bills shown in the upcoming list
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// An active bill with its next occurrence resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingBill {
    pub bill: RecurringBill,
    pub due_date: NaiveDate,
    pub days_until_due: i64,
}

/// Sum of amounts over active bills
pub fn total_monthly_bills(bills: &[RecurringBill]) -> f64 {
    bills.iter().filter(|b| b.is_active).map(|b| b.amount).sum()
}

/// Sum of amounts over active bills that pay automatically
pub fn total_auto_paid(bills: &[RecurringBill]) -> f64 {
    bills
        .iter()
        .filter(|b| b.is_active && b.auto_pay)
        .map(|b| b.amount)
        .sum()
}

/// Active bills ordered by days until due, soonest first, at most `limit`.
///
/// Ties keep their input order.
pub fn upcoming_bills(bills: &[RecurringBill], now: NaiveDateTime, limit: usize) -> Vec<UpcomingBill> {
    let mut upcoming: Vec<UpcomingBill> = bills
        .iter()
        .filter(|b| b.is_active)
        .map(|b| {
            let due_date = next_bill_due_date(b.due_day, now);
            UpcomingBill {
                bill: b.clone(),
                due_date,
                days_until_due: days_until_due(due_date, now),
            }
        })
        .collect();

    upcoming.sort_by_key(|u| u.days_until_due);
    upcoming.truncate(limit);
    upcoming
}

pub fn total_upcoming(upcoming: &[UpcomingBill]) -> f64 {
    upcoming.iter().map(|u| u.bill.amount).sum()
}

/// Sum of completed payments. Pending and failed ones are not counted.
pub fn total_paid(payments: &[BillPayment]) -> f64 {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .map(|p| p.amount)
        .sum()
}

/// Payments of any status made in the same calendar month and year as `now`
pub fn payments_in_month(payments: &[BillPayment], now: NaiveDateTime) -> Vec<&BillPayment> {
    payments
        .iter()
        .filter(|p| p.paid_at.month() == now.month() && p.paid_at.year() == now.year())
        .collect()
}
