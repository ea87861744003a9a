//! Compensation configuration, earnings rates and payroll streams

mod rate;
mod stream;
pub mod loader;

pub use rate::{
    daily_earnings, earnings_per_second, monthly_earnings, CompensationConfig, CompensationMode,
    HOURS_PER_DAY, SECONDS_PER_HOUR, WORKING_DAYS_PER_MONTH, WORKING_SECONDS_PER_DAY,
    WORKING_SECONDS_PER_MONTH,
};
pub use stream::{
    accrued_earnings, daily_target_progress, workday_progress, PayrollStream, WORKDAY_END_HOUR,
    WORKDAY_START_HOUR,
};
pub use loader::{load_streams, load_streams_from_reader, DEFAULT_STREAMS_PATH};
