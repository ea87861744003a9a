//! Next-occurrence computation for monthly due days
//!
//! A due day that does not exist in the target month rolls over into the
//! following month (day 31 of a 30-day month is the 1st of the next). The
//! rollover is kept as-is; it is not clamped to the month's last day.
//!
//! Any `u32` due day is accepted. Dates past chrono's range saturate at
//! `NaiveDate::MAX` instead of panicking.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Timelike};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// `day` counted from the first of the month, rolling over past month end
fn day_in_month(month_start: NaiveDate, day: u32) -> NaiveDate {
    month_start
        .checked_add_signed(Duration::days(day as i64 - 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Next due date for a bill falling on `due_day` each month.
///
/// The candidate in the current month counts from midnight; if that moment
/// is at or before `now` the bill moves to the next month.
pub fn next_bill_due_date(due_day: u32, now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    let month_start = today - Duration::days(today.day0() as i64);

    let candidate = day_in_month(month_start, due_day);
    if candidate <= today {
        let next_month = month_start
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        day_in_month(next_month, due_day)
    } else {
        candidate
    }
}

/// Whole days from `now` until midnight of `due`, rounded up.
///
/// Zero or negative when the date has passed.
pub fn days_until_due(due: NaiveDate, now: NaiveDateTime) -> i64 {
    let whole_days = due.signed_duration_since(now.date()).num_days();
    let into_today_ms =
        now.num_seconds_from_midnight() as i64 * 1000 + (now.nanosecond() / 1_000_000) as i64;
    let millis = whole_days * MILLIS_PER_DAY as i64 - into_today_ms;

    (millis as f64 / MILLIS_PER_DAY).ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_passed_day_moves_to_next_month() {
        assert_eq!(next_bill_due_date(15, at(2024, 3, 20, 10)), date(2024, 4, 15));
    }

    #[test]
    fn test_upcoming_day_stays_in_month() {
        assert_eq!(next_bill_due_date(25, at(2024, 3, 20, 10)), date(2024, 3, 25));
    }

    #[test]
    fn test_due_today_counts_as_passed() {
        assert_eq!(next_bill_due_date(20, at(2024, 3, 20, 0)), date(2024, 4, 20));
        assert_eq!(next_bill_due_date(20, at(2024, 3, 20, 18)), date(2024, 4, 20));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        assert_eq!(next_bill_due_date(5, at(2024, 12, 10, 9)), date(2025, 1, 5));
    }

    #[test]
    fn test_short_month_overflow() {
        // April has 30 days: day 31 lands on May 1
        assert_eq!(next_bill_due_date(31, at(2024, 4, 10, 9)), date(2024, 5, 1));
        // Passed in March, next month overflow: April 31 -> May 1
        assert_eq!(next_bill_due_date(31, at(2024, 3, 31, 9)), date(2024, 5, 1));
        // February 2023 has 28 days: day 30 -> March 2
        assert_eq!(next_bill_due_date(30, at(2023, 2, 1, 9)), date(2023, 3, 2));
        // Leap year February: day 30 -> March 1
        assert_eq!(next_bill_due_date(30, at(2024, 2, 1, 9)), date(2024, 3, 1));
    }

    #[test]
    fn test_day_zero_is_last_day_of_previous_month() {
        // Candidate Feb 29 has passed; next is the day before April 1
        assert_eq!(next_bill_due_date(0, at(2024, 3, 10, 9)), date(2024, 3, 31));
    }

    #[test]
    fn test_huge_due_day_saturates() {
        let now = at(2024, 3, 20, 10);
        assert_eq!(next_bill_due_date(u32::MAX, now), NaiveDate::MAX);
        assert!(days_until_due(NaiveDate::MAX, now) > 0);

        // Near the end of the calendar the next month cannot be built
        let last = NaiveDate::MAX.and_hms_opt(10, 0, 0).unwrap();
        assert_eq!(next_bill_due_date(1, last), NaiveDate::MAX);
    }

    #[test]
    fn test_days_until_due_rounds_up() {
        let now = at(2024, 3, 20, 10);
        assert_eq!(days_until_due(date(2024, 3, 25), now), 5);
        assert_eq!(days_until_due(date(2024, 3, 21), now), 1);
        assert_eq!(days_until_due(date(2024, 4, 15), now), 26);
    }

    #[test]
    fn test_days_until_due_at_midnight_is_exact() {
        let now = at(2024, 3, 20, 0);
        assert_eq!(days_until_due(date(2024, 3, 25), now), 5);
    }

    #[test]
    fn test_days_until_due_past_date() {
        let now = at(2024, 3, 20, 12);
        assert_eq!(days_until_due(date(2024, 3, 20), now), 0);
        assert_eq!(days_until_due(date(2024, 3, 18), now), -2);
    }
}
