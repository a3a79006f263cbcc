//! Day class detection.
//!
//! Rates differ between weekdays (Monday to Friday, day numbers 1 to 5) and
//! the weekend (Saturday and Sunday, day numbers 6 and 7).

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Whether an interval was worked on a weekday or at the weekend.
///
/// # Example
///
/// ```
/// use pay_calculator::calculation::DayClass;
///
/// let day_class = DayClass::Weekend;
/// assert_eq!(format!("{}", day_class), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Monday through Friday.
    Weekday,
    /// Saturday and Sunday.
    Weekend,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Weekday => write!(f, "Weekday"),
            DayClass::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Determines the day class for a weekday.
///
/// Day numbers 1 to 5 (Monday to Friday) are weekdays; 6 and 7 are the
/// weekend.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use pay_calculator::calculation::{DayClass, classify_day};
///
/// assert_eq!(classify_day(Weekday::Fri), DayClass::Weekday);
/// assert_eq!(classify_day(Weekday::Sat), DayClass::Weekend);
/// ```
pub fn classify_day(day: Weekday) -> DayClass {
    match day.number_from_monday() {
        1..=5 => DayClass::Weekday,
        _ => DayClass::Weekend,
    }
}
