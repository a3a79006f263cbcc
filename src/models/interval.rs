//! Interval token decoding.
//!
//! An interval token encodes one worked time range on one day of the week,
//! in the form `DDHH:MM-HH:MM` (for example `MO10:00-12:00`).

use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::Serialize;

use crate::error::{PayrollError, PayrollResult};

/// Format of a clock time inside an interval token.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Recognized two-letter day codes, in day-number order.
pub const DAY_CODES: [(&str, Weekday); 7] = [
    ("MO", Weekday::Mon),
    ("TU", Weekday::Tue),
    ("WE", Weekday::Wed),
    ("TH", Weekday::Thu),
    ("FR", Weekday::Fri),
    ("SA", Weekday::Sat),
    ("SU", Weekday::Sun),
];

/// Looks up the weekday for a two-letter day code.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use pay_calculator::models::weekday_from_code;
///
/// assert_eq!(weekday_from_code("SA"), Some(Weekday::Sat));
/// assert_eq!(weekday_from_code("MI"), None);
/// ```
pub fn weekday_from_code(code: &str) -> Option<Weekday> {
    DAY_CODES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, weekday)| *weekday)
}

/// Parses a 24-hour `HH:MM` clock time.
///
/// Exactly two digits are required for both hours and minutes, so `9:00`
/// is rejected even though a lenient `%H:%M` parser would accept it and
/// price `MO9:00-11:00` as two hours.
pub fn parse_clock_time(raw: &str) -> PayrollResult<NaiveTime> {
    let well_formed = raw.len() == 5
        && raw
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 2 { b == b':' } else { b.is_ascii_digit() });

    if !well_formed {
        return Err(PayrollError::input_format(raw, "expected HH:MM time"));
    }

    NaiveTime::parse_from_str(raw, CLOCK_FORMAT)
        .map_err(|e| PayrollError::input_format(raw, format!("invalid time: {}", e)))
}

/// A decoded interval: the day it was worked and its start and end times.
///
/// The end time is always strictly after the start time; intervals that
/// cross midnight are rejected when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedInterval {
    /// The day of the week.
    pub day: Weekday,
    /// When work started.
    pub start: NaiveTime,
    /// When work ended.
    pub end: NaiveTime,
}

impl ParsedInterval {
    /// Returns the day number, Monday = 1 through Sunday = 7.
    pub fn day_number(&self) -> u32 {
        self.day.number_from_monday()
    }
}

impl FromStr for ParsedInterval {
    type Err = PayrollError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        decode_interval(token)
    }
}

/// Decodes one interval token.
///
/// The day code is checked first, so a token with both a bad day code and a
/// bad time portion reports [`PayrollError::UnknownDay`].
///
/// # Errors
///
/// - [`PayrollError::UnknownDay`] when the first two characters are not a day code
/// - [`PayrollError::InputFormat`] when the time portion is not exactly two
///   `-`-separated `HH:MM` times, or the end time is not after the start time
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use pay_calculator::models::decode_interval;
///
/// let interval = decode_interval("SU20:00-21:00").unwrap();
/// assert_eq!(interval.day, Weekday::Sun);
/// assert_eq!(interval.day_number(), 7);
/// ```
pub fn decode_interval(token: &str) -> PayrollResult<ParsedInterval> {
    let day = token
        .get(..2)
        .and_then(weekday_from_code)
        .ok_or_else(|| PayrollError::UnknownDay {
            code: token.chars().take(2).collect(),
        })?;

    // A matched day code is two ASCII bytes, so slicing at 2 is safe.
    let times: Vec<&str> = token[2..].split('-').collect();
    if times.len() != 2 {
        return Err(PayrollError::input_format(
            token,
            "expected exactly one '-' between start and end times",
        ));
    }

    let start = parse_clock_time(times[0])?;
    let end = parse_clock_time(times[1])?;

    if end <= start {
        return Err(PayrollError::input_format(
            token,
            "end time must be after start time",
        ));
    }

    Ok(ParsedInterval { day, start, end })
}
