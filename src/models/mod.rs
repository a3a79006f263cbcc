//! Core data models for the pay calculator.
//!
//! This module contains the input line, decoded interval and computed
//! record types used throughout the crate.

mod interval;
mod pay_line;
mod pay_record;

pub use interval::{
    CLOCK_FORMAT, DAY_CODES, ParsedInterval, decode_interval, parse_clock_time, weekday_from_code,
};
pub use pay_line::PayLine;
pub use pay_record::PayRecord;
