//! Pay calculation for a single interval.
//!
//! Pay is the number of whole hours worked multiplied by the hourly rate for
//! the interval's day class and time band. Partial hours are truncated.

use chrono::NaiveTime;
use serde::Serialize;

use crate::config::PayrollConfig;
use crate::models::ParsedInterval;

use super::day_class::{DayClass, classify_day};
use super::time_band::{TimeBand, classify_band};

/// The result of pricing one interval, with the values that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalPayResult {
    /// The interval that was priced.
    pub interval: ParsedInterval,
    /// Weekday or weekend.
    pub day_class: DayClass,
    /// Night, day or evening.
    pub band: TimeBand,
    /// Whole hours worked.
    pub hours: u32,
    /// Hourly rate applied.
    pub rate: u32,
    /// `hours * rate`.
    pub amount: u64,
}

/// Returns the whole hours between two times, truncating partial hours.
///
/// Returns zero if `end` is not after `start`.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use pay_calculator::calculation::whole_hours;
///
/// let t = |s| NaiveTime::parse_from_str(s, "%H:%M").unwrap();
/// assert_eq!(whole_hours(t("10:00"), t("11:30")), 1);
/// assert_eq!(whole_hours(t("10:00"), t("10:59")), 0);
/// ```
pub fn whole_hours(start: NaiveTime, end: NaiveTime) -> u32 {
    u32::try_from((end - start).num_hours()).unwrap_or(0)
}

/// Calculates the pay for one decoded interval.
///
/// The day class comes from the interval's day, the band from its original
/// start and end times, and the rate from the configured table.
///
/// # Example
///
/// ```
/// use pay_calculator::calculation::{TimeBand, calculate_interval_pay};
/// use pay_calculator::config::PayrollConfig;
/// use pay_calculator::models::decode_interval;
///
/// let interval = decode_interval("SA09:00-18:00").unwrap();
/// let result = calculate_interval_pay(&interval, &PayrollConfig::default());
///
/// assert_eq!(result.band, TimeBand::Evening);
/// assert_eq!(result.amount, 225);
/// ```
pub fn calculate_interval_pay(
    interval: &ParsedInterval,
    config: &PayrollConfig,
) -> IntervalPayResult {
    let day_class = classify_day(interval.day);
    let band = classify_band(interval.start, interval.end, &config.boundaries);
    let hours = whole_hours(interval.start, interval.end);
    let rate = config.rates.rate_for(day_class, band);

    IntervalPayResult {
        interval: *interval,
        day_class,
        band,
        hours,
        rate,
        amount: u64::from(hours) * u64::from(rate),
    }
}
