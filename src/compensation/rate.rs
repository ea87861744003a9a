//! Earnings-rate derivation from a compensation configuration
//!
//! Monthly salaries are spread over a fixed schedule of 22 working days of
//! 8 hours each. No calendar-aware working-day computation is done.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Working days assumed in every month
pub const WORKING_DAYS_PER_MONTH: u32 = 22;

/// Working hours assumed in every working day
pub const HOURS_PER_DAY: u32 = 8;

pub const SECONDS_PER_HOUR: u32 = 3600;

/// Working seconds in one working day (8 * 3600)
pub const WORKING_SECONDS_PER_DAY: u32 = HOURS_PER_DAY * SECONDS_PER_HOUR;

/// Working seconds in one month (22 * 8 * 3600 = 633,600)
pub const WORKING_SECONDS_PER_MONTH: u32 = WORKING_DAYS_PER_MONTH * WORKING_SECONDS_PER_DAY;

/// Which field of a [`CompensationConfig`] drives the rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompensationMode {
    Monthly,
    Hourly,
}

/// Salary configuration of a payroll stream
///
/// A positive hourly rate takes precedence over the monthly salary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompensationConfig {
    /// Monthly salary in base currency units (VND)
    #[serde(default)]
    pub monthly_salary: Option<f64>,

    /// Hourly rate in base currency units
    #[serde(default)]
    pub hourly_rate: Option<f64>,
}

impl CompensationConfig {
    pub fn monthly(monthly_salary: f64) -> Self {
        Self {
            monthly_salary: Some(monthly_salary),
            hourly_rate: None,
        }
    }

    pub fn hourly(hourly_rate: f64) -> Self {
        Self {
            monthly_salary: None,
            hourly_rate: Some(hourly_rate),
        }
    }

    /// Hourly rate, if present and positive
    fn active_hourly_rate(&self) -> Option<f64> {
        self.hourly_rate.filter(|rate| *rate > 0.0)
    }

    /// The active mode, or `None` when neither field is supplied
    pub fn mode(&self) -> Option<CompensationMode> {
        if self.active_hourly_rate().is_some() {
            Some(CompensationMode::Hourly)
        } else if self.monthly_salary.is_some() {
            Some(CompensationMode::Monthly)
        } else {
            None
        }
    }

    /// Check that the active mode carries a positive value.
    ///
    /// The rate functions never call this; callers validate upstream.
    pub fn validate(&self) -> Result<()> {
        match (self.monthly_salary, self.hourly_rate) {
            (_, Some(hourly)) if hourly > 0.0 => Ok(()),
            (Some(monthly), _) if monthly > 0.0 => Ok(()),
            (None, None) => Err(EngineError::MissingCompensation),
            (Some(monthly), _) => Err(EngineError::NonPositiveCompensation {
                field: "monthly_salary",
                value: monthly,
            }),
            (None, Some(hourly)) => Err(EngineError::NonPositiveCompensation {
                field: "hourly_rate",
                value: hourly,
            }),
        }
    }
}

/// Earnings per working second.
///
/// `hourly_rate / 3600` when the hourly rate is present and positive,
/// otherwise `monthly_salary / 633600`. A missing salary yields zero and
/// negative inputs yield negative rates.
pub fn earnings_per_second(config: &CompensationConfig) -> f64 {
    match config.active_hourly_rate() {
        Some(hourly) => hourly / SECONDS_PER_HOUR as f64,
        None => config.monthly_salary.unwrap_or(0.0) / WORKING_SECONDS_PER_MONTH as f64,
    }
}

/// Earnings over one 8-hour working day
pub fn daily_earnings(config: &CompensationConfig) -> f64 {
    earnings_per_second(config) * WORKING_SECONDS_PER_DAY as f64
}

/// Earnings over one 22-day working month
pub fn monthly_earnings(config: &CompensationConfig) -> f64 {
    earnings_per_second(config) * WORKING_SECONDS_PER_MONTH as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_working_seconds_constants() {
        assert_eq!(WORKING_SECONDS_PER_DAY, 28_800);
        assert_eq!(WORKING_SECONDS_PER_MONTH, 633_600);
    }

    #[test]
    fn test_hourly_rate_per_second() {
        let config = CompensationConfig::hourly(180_000.0);
        assert_eq!(earnings_per_second(&config), 180_000.0 / 3600.0);
        assert_eq!(config.mode(), Some(CompensationMode::Hourly));
    }

    #[test]
    fn test_monthly_salary_per_second() {
        let config = CompensationConfig::monthly(30_000_000.0);
        assert_eq!(earnings_per_second(&config), 30_000_000.0 / 633_600.0);
        assert_eq!(config.mode(), Some(CompensationMode::Monthly));
    }

    #[test]
    fn test_hourly_takes_precedence() {
        let config = CompensationConfig {
            monthly_salary: Some(30_000_000.0),
            hourly_rate: Some(200_000.0),
        };
        assert_eq!(earnings_per_second(&config), 200_000.0 / 3600.0);
    }

    #[test]
    fn test_zero_hourly_falls_back_to_monthly() {
        let config = CompensationConfig {
            monthly_salary: Some(15_840_000.0),
            hourly_rate: Some(0.0),
        };
        assert_relative_eq!(earnings_per_second(&config), 25.0);
        assert_eq!(config.mode(), Some(CompensationMode::Monthly));
    }

    #[test]
    fn test_missing_compensation_is_zero() {
        let config = CompensationConfig::default();
        assert_eq!(earnings_per_second(&config), 0.0);
        assert_eq!(daily_earnings(&config), 0.0);
        assert!(config.mode().is_none());
    }

    #[test]
    fn test_negative_salary_passes_through() {
        let config = CompensationConfig::monthly(-633_600.0);
        assert_relative_eq!(earnings_per_second(&config), -1.0);
    }

    #[test]
    fn test_daily_and_monthly_earnings() {
        let config = CompensationConfig::monthly(30_000_000.0);
        let per_second = earnings_per_second(&config);
        assert_eq!(daily_earnings(&config), per_second * 28_800.0);
        assert_relative_eq!(monthly_earnings(&config), 30_000_000.0, max_relative = 1e-12);

        let hourly = CompensationConfig::hourly(100_000.0);
        assert_relative_eq!(daily_earnings(&hourly), 800_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(CompensationConfig::monthly(1.0).validate().is_ok());
        assert!(CompensationConfig::hourly(1.0).validate().is_ok());
        assert!(matches!(
            CompensationConfig::default().validate(),
            Err(EngineError::MissingCompensation)
        ));
        assert!(matches!(
            CompensationConfig::monthly(0.0).validate(),
            Err(EngineError::NonPositiveCompensation { field: "monthly_salary", .. })
        ));
        assert!(matches!(
            CompensationConfig::hourly(-5.0).validate(),
            Err(EngineError::NonPositiveCompensation { field: "hourly_rate", .. })
        ));
    }
}
