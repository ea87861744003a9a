//! Load recurring bills from bills.csv

use super::bill::{validate_due_day, BillCategory, RecurringBill};
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Default path to the bill input file
pub const DEFAULT_BILLS_PATH: &str = "data/bills.csv";

/// Raw CSV row matching bills.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    bill_name: String,
    amount: f64,
    due_date: u32,
    category: String,
    is_active: bool,
    auto_pay: bool,
}

impl CsvRow {
    fn into_bill(self) -> Result<RecurringBill> {
        Ok(RecurringBill {
            id: self.id,
            name: self.bill_name,
            amount: self.amount,
            due_day: validate_due_day(self.due_date)?,
            category: BillCategory::parse(&self.category)?,
            is_active: self.is_active,
            auto_pay: self.auto_pay,
        })
    }
}

/// Load all bills from a CSV file
pub fn load_bills<P: AsRef<Path>>(path: P) -> Result<Vec<RecurringBill>> {
    let file = std::fs::File::open(path.as_ref())?;
    let bills = load_bills_from_reader(file)?;
    log::info!("Loaded {} bills from {}", bills.len(), path.as_ref().display());
    Ok(bills)
}

/// Load bills from any reader (e.g., string buffer)
pub fn load_bills_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<RecurringBill>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut bills = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        bills.push(row.into_bill()?);
    }

    Ok(bills)
}
