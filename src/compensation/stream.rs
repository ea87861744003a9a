//! Payroll streams and the per-second accrual shown while a stream runs

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::rate::{daily_earnings, earnings_per_second, CompensationConfig, SECONDS_PER_HOUR};

/// Hour the streaming workday starts (09:00)
pub const WORKDAY_START_HOUR: u32 = 9;

/// Hour the streaming workday ends (17:00)
pub const WORKDAY_END_HOUR: u32 = 17;

/// A salary stream from one employer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollStream {
    pub id: String,
    pub employer_name: String,
    #[serde(flatten)]
    pub compensation: CompensationConfig,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl PayrollStream {
    pub fn earnings_per_second(&self) -> f64 {
        earnings_per_second(&self.compensation)
    }

    pub fn daily_earnings(&self) -> f64 {
        daily_earnings(&self.compensation)
    }

    /// Active and within its start/end window on `date` (end date inclusive)
    pub fn is_streaming_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && date >= self.start_date
            && self.end_date.map_or(true, |end| date <= end)
    }
}

/// Total accrued after `ticks` one-second ticks
pub fn accrued_earnings(config: &CompensationConfig, ticks: u64) -> f64 {
    earnings_per_second(config) * ticks as f64
}

/// Percentage of the 09:00-17:00 workday elapsed at `now`, clamped to 0..=100
pub fn workday_progress(now: NaiveDateTime) -> f64 {
    let start = (WORKDAY_START_HOUR * SECONDS_PER_HOUR) as f64;
    let end = (WORKDAY_END_HOUR * SECONDS_PER_HOUR) as f64;
    let elapsed = now.num_seconds_from_midnight() as f64 + now.nanosecond() as f64 / 1e9;

    ((elapsed - start) / (end - start) * 100.0).clamp(0.0, 100.0)
}

/// Share of the daily target earned so far, in percent (not clamped)
pub fn daily_target_progress(current: f64, daily_target: f64) -> f64 {
    if daily_target > 0.0 {
        current / daily_target * 100.0
    } else {
        0.0
    }
}
