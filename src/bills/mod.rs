//! Recurring bills: due-date scheduling, totals, payments and loading

mod bill;
mod schedule;
mod summary;
pub mod loader;

pub use bill::{validate_due_day, BillCategory, BillPayment, PaymentStatus, RecurringBill};
pub use schedule::{days_until_due, next_bill_due_date};
pub use summary::{
    payments_in_month, total_auto_paid, total_monthly_bills, total_paid, total_upcoming,
    upcoming_bills, UpcomingBill, DEFAULT_UPCOMING_LIMIT,
};
pub use loader::{load_bills, load_bills_from_reader, DEFAULT_BILLS_PATH};
