//! Calculation logic for the pay calculator.
//!
//! This module contains day class detection, time band classification,
//! per-interval pay calculation, and aggregation of intervals into a
//! total per line.

mod aggregate;
mod day_class;
mod interval_pay;
mod time_band;

pub use aggregate::{LinePayResult, calculate_batch, calculate_line, calculate_total_pay};
pub use day_class::{DayClass, classify_day};
pub use interval_pay::{IntervalPayResult, calculate_interval_pay, whole_hours};
pub use time_band::{TimeBand, classify_band};
