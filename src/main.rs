//! Paystream CLI
//!
//! Command-line front end to the financial calculation engine

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use paystream_engine::{
    allocation::{apply_allocation_rules, AllocationRule},
    bills::{
        days_until_due, load_bills, next_bill_due_date, total_monthly_bills, total_upcoming,
        upcoming_bills, validate_due_day, DEFAULT_BILLS_PATH, DEFAULT_UPCOMING_LIMIT,
    },
    compensation::{daily_earnings, earnings_per_second, monthly_earnings, CompensationConfig},
    currency::{format_currency, format_vnd, RateTable, DEFAULT_CURRENCY},
    growth::{compound_interest, project_growth, DEFAULT_COMPOUNDS_PER_YEAR},
    invoice::{quote_invoice, streaming_rate_per_second, STREAMING_PERIOD_DAYS},
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paystream", version, about = "Payroll streaming financial calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Earnings per second, day and month for a salary
    Rate {
        /// Monthly salary in VND
        #[arg(long, required_unless_present = "hourly")]
        monthly: Option<f64>,

        /// Hourly rate in VND (takes precedence over --monthly)
        #[arg(long)]
        hourly: Option<f64>,
    },

    /// Split an earned amount into savings, investment and spending
    Allocate {
        amount: f64,

        #[arg(long, default_value_t = 10.0)]
        savings: f64,

        #[arg(long, default_value_t = 20.0)]
        investment: f64,

        /// Spending percentage (defaults to the remainder up to 100)
        #[arg(long)]
        spending: Option<f64>,
    },

    /// Compound growth of a principal
    Project {
        principal: f64,

        /// Annual rate as a fraction (0.06 = 6%)
        #[arg(long)]
        rate: f64,

        #[arg(long, default_value_t = 1.0)]
        years: f64,

        #[arg(long, default_value_t = DEFAULT_COMPOUNDS_PER_YEAR)]
        compounds: u32,

        /// Also print the balance at each whole year
        #[arg(long)]
        schedule: bool,
    },

    /// Next due date for a bill on the given day of the month
    Due {
        day: u32,

        /// Reference time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS), defaults to now
        #[arg(long, value_parser = parse_now)]
        now: Option<NaiveDateTime>,
    },

    /// Upcoming bills from a CSV file
    Bills {
        #[arg(long, default_value = DEFAULT_BILLS_PATH)]
        file: PathBuf,

        #[arg(long, default_value_t = DEFAULT_UPCOMING_LIMIT)]
        limit: usize,

        #[arg(long, value_parser = parse_now)]
        now: Option<NaiveDateTime>,
    },

    /// Format an amount as vi-VN currency text
    Format {
        amount: f64,

        #[arg(long, default_value = DEFAULT_CURRENCY, value_parser = parse_currency_code)]
        currency: String,
    },

    /// Convert an amount between currencies
    Convert {
        amount: f64,

        #[arg(value_parser = parse_currency_code)]
        from: String,

        #[arg(value_parser = parse_currency_code)]
        to: String,

        /// Exchange-rate CSV (pair,rate); defaults to the built-in snapshot
        #[arg(long)]
        rates: Option<PathBuf>,
    },

    /// Platform fee and payout streaming for an invoice
    Invoice { amount: f64 },
}

fn parse_now(s: &str) -> std::result::Result<NaiveDateTime, String> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", s, e))?;
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("invalid date '{}'", s))
}

/// Rate tables key on upper-case codes, so `btc` is read as `BTC`
fn parse_currency_code(s: &str) -> std::result::Result<String, String> {
    let code = s.trim();
    if code.is_empty() || code.contains('/') {
        return Err(format!("invalid currency code '{}'", s));
    }
    Ok(code.to_ascii_uppercase())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let now_or_local = |now: Option<NaiveDateTime>| now.unwrap_or_else(|| Local::now().naive_local());

    match cli.command {
        Command::Rate { monthly, hourly } => {
            let config = CompensationConfig {
                monthly_salary: monthly,
                hourly_rate: hourly,
            };
            config.validate()?;

            let per_second = earnings_per_second(&config);
            let daily = daily_earnings(&config);
            let monthly = monthly_earnings(&config);

            if cli.json {
                print_json(&json!({
                    "mode": config.mode(),
                    "earnings_per_second": per_second,
                    "daily_earnings": daily,
                    "monthly_earnings": monthly,
                }))?;
            } else {
                println!("Per second: {}", format_vnd(per_second));
                println!("Per day:    {}", format_vnd(daily));
                println!("Per month:  {}", format_vnd(monthly));
            }
        }

        Command::Allocate { amount, savings, investment, spending } => {
            let rule = match spending {
                Some(spending) => AllocationRule::new(savings, investment, spending),
                None => AllocationRule::with_complement(savings, investment),
            };
            rule.validate()?;
            let split = apply_allocation_rules(amount, &rule);

            if cli.json {
                print_json(&json!({ "rule": rule, "split": split }))?;
            } else {
                println!("Savings    ({:>5.1}%): {}", rule.savings_percentage, format_vnd(split.savings));
                println!("Investment ({:>5.1}%): {}", rule.investment_percentage, format_vnd(split.investment));
                println!("Spending   ({:>5.1}%): {}", rule.spending_percentage, format_vnd(split.spending));
            }
        }

        Command::Project { principal, rate, years, compounds, schedule } => {
            let value = compound_interest(principal, rate, years, compounds);
            let points = if schedule {
                project_growth(principal, rate, years.floor().max(0.0) as u32, compounds)
            } else {
                Vec::new()
            };

            if cli.json {
                print_json(&json!({ "value": value, "schedule": points }))?;
            } else {
                println!("Projected value after {} years: {}", years, format_vnd(value));
                for point in &points {
                    println!(
                        "  Year {:>3}: {:>24}  (interest {})",
                        point.year,
                        format_vnd(point.balance),
                        format_vnd(point.interest_earned)
                    );
                }
            }
        }

        Command::Due { day, now } => {
            let day = validate_due_day(day)?;
            let now = now_or_local(now);
            let due = next_bill_due_date(day, now);
            let days = days_until_due(due, now);

            if cli.json {
                print_json(&json!({ "due_date": due, "days_until_due": days }))?;
            } else {
                println!("Next due: {} ({} days)", due, days);
            }
        }

        Command::Bills { file, limit, now } => {
            let bills = load_bills(&file)
                .with_context(|| format!("Failed to load bills from {}", file.display()))?;
            let now = now_or_local(now);
            let upcoming = upcoming_bills(&bills, now, limit);

            if cli.json {
                print_json(&json!({
                    "total_monthly": total_monthly_bills(&bills),
                    "total_upcoming": total_upcoming(&upcoming),
                    "upcoming": upcoming,
                }))?;
            } else {
                println!("Monthly bills: {}", format_vnd(total_monthly_bills(&bills)));
                for u in &upcoming {
                    println!(
                        "  {:<24} {:>18}  due {} ({} days)",
                        u.bill.name,
                        format_vnd(u.bill.amount),
                        u.due_date,
                        u.days_until_due
                    );
                }
                println!("Total upcoming: {}", format_vnd(total_upcoming(&upcoming)));
            }
        }

        Command::Format { amount, currency } => {
            let text = format_currency(amount, &currency);
            if cli.json {
                print_json(&json!({ "formatted": text }))?;
            } else {
                println!("{}", text);
            }
        }

        Command::Convert { amount, from, to, rates } => {
            let table = match rates {
                Some(path) => RateTable::from_csv_path(&path)
                    .with_context(|| format!("Failed to load rates from {}", path.display()))?,
                None => RateTable::snapshot(),
            };
            let conversion = table.quote(amount, &from, &to);

            if cli.json {
                print_json(&json!({
                    "amount": amount,
                    "from": from,
                    "to": to,
                    "result": conversion.amount,
                    "path": conversion.path,
                }))?;
            } else {
                println!(
                    "{} = {} (via {:?})",
                    format_currency(amount, &from),
                    format_currency(conversion.amount, &to),
                    conversion.path
                );
            }
        }

        Command::Invoice { amount } => {
            let quote = quote_invoice(amount);
            let per_second = streaming_rate_per_second(amount);

            if cli.json {
                print_json(&json!({ "quote": quote, "streaming_rate_per_second": per_second }))?;
            } else {
                println!("Invoice:      {}", format_vnd(quote.gross));
                println!("Platform fee: {}", format_vnd(quote.platform_fee));
                println!("You receive:  {}", format_vnd(quote.net));
                println!(
                    "Streams at {} per second over {} days",
                    format_vnd(per_second),
                    STREAMING_PERIOD_DAYS
                );
            }
        }
    }

    Ok(())
}
