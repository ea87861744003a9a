//! Summarize every payroll stream and bill from the data/ CSV inputs
//!
//! Usage: cargo run --bin run_batch
//!
//! Writes per-stream figures to stream_summary_output.csv and prints the
//! combined monthly allocation and the upcoming bills.

use anyhow::{Context, Result};
use chrono::Local;
use paystream_engine::{
    allocation::AllocationRule,
    bills::{load_bills, total_monthly_bills, upcoming_bills, DEFAULT_BILLS_PATH, DEFAULT_UPCOMING_LIMIT},
    compensation::{load_streams, DEFAULT_STREAMS_PATH},
    currency::format_vnd,
    engine::FinancialEngine,
};
use serde::Serialize;
use std::time::Instant;

/// Flat output row; one per stream
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    stream_id: &'a str,
    employer_name: &'a str,
    streaming: bool,
    earnings_per_second: f64,
    daily_earnings: f64,
    monthly_earnings: f64,
    savings: f64,
    investment: f64,
    spending: f64,
    projected_savings: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let now = Local::now().naive_local();

    let streams = load_streams(DEFAULT_STREAMS_PATH)
        .with_context(|| format!("Failed to load streams from {}", DEFAULT_STREAMS_PATH))?;
    let bills = load_bills(DEFAULT_BILLS_PATH)
        .with_context(|| format!("Failed to load bills from {}", DEFAULT_BILLS_PATH))?;
    println!("Loaded {} streams and {} bills in {:?}", streams.len(), bills.len(), start.elapsed());

    let engine = match FinancialEngine::from_csv() {
        Ok(engine) => engine,
        Err(e) => {
            log::warn!("Using built-in rate snapshot: {}", e);
            FinancialEngine::new()
        }
    };
    let rule = AllocationRule::default();

    let summaries = engine.summarize_batch(&streams, &rule);

    let output_path = "stream_summary_output.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;

    for (stream, summary) in streams.iter().zip(&summaries) {
        writer.serialize(OutputRow {
            stream_id: &summary.stream_id,
            employer_name: &summary.employer_name,
            streaming: stream.is_streaming_on(now.date()),
            earnings_per_second: summary.earnings_per_second,
            daily_earnings: summary.daily_earnings,
            monthly_earnings: summary.monthly_earnings,
            savings: summary.monthly_allocation.savings,
            investment: summary.monthly_allocation.investment,
            spending: summary.monthly_allocation.spending,
            projected_savings: summary.projected_savings,
        })?;
    }
    writer.flush()?;
    println!("Output written to {}", output_path);

    let live: Vec<_> = streams
        .iter()
        .zip(&summaries)
        .filter(|(stream, _)| stream.is_streaming_on(now.date()))
        .map(|(_, summary)| summary.clone())
        .collect();
    let total = FinancialEngine::total_allocation(&live);

    println!("\nLive streams: {}", live.len());
    println!("  Monthly savings:    {}", format_vnd(total.savings));
    println!("  Monthly investment: {}", format_vnd(total.investment));
    println!("  Monthly spending:   {}", format_vnd(total.spending));

    println!("\nMonthly bills: {}", format_vnd(total_monthly_bills(&bills)));
    for u in upcoming_bills(&bills, now, DEFAULT_UPCOMING_LIMIT) {
        println!("  {:<20} {:>16}  due {} ({} days)", u.bill.name, format_vnd(u.bill.amount), u.due_date, u.days_until_due);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
