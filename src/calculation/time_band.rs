//! Time band classification.
//!
//! An interval is classified by its original start and end times, not by
//! its duration. Intervals that are not wholly inside the night or day band
//! fall through to the evening band; they are never split across bands.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::config::BandBoundaries;

/// The time-of-day band used to select a rate tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    /// Starts after `night_start` and ends before `day_start`.
    Night,
    /// Starts after `day_start` and ends before `evening_start`.
    Day,
    /// Everything else, including intervals straddling a boundary.
    Evening,
}

impl std::fmt::Display for TimeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeBand::Night => write!(f, "Night"),
            TimeBand::Day => write!(f, "Day"),
            TimeBand::Evening => write!(f, "Evening"),
        }
    }
}

/// Classifies an interval into a time band.
///
/// All comparisons are strict, so with the default boundaries an interval
/// starting at exactly 09:01 is not in the day band.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use pay_calculator::calculation::{TimeBand, classify_band};
/// use pay_calculator::config::BandBoundaries;
///
/// let t = |s| NaiveTime::parse_from_str(s, "%H:%M").unwrap();
/// let boundaries = BandBoundaries::default();
///
/// assert_eq!(classify_band(t("00:30"), t("09:00"), &boundaries), TimeBand::Night);
/// assert_eq!(classify_band(t("10:00"), t("12:00"), &boundaries), TimeBand::Day);
/// assert_eq!(classify_band(t("09:00"), t("18:00"), &boundaries), TimeBand::Evening);
/// ```
pub fn classify_band(start: NaiveTime, end: NaiveTime, boundaries: &BandBoundaries) -> TimeBand {
    if start > boundaries.night_start && end < boundaries.day_start {
        TimeBand::Night
    } else if start > boundaries.day_start && end < boundaries.evening_start {
        TimeBand::Day
    } else {
        TimeBand::Evening
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn band(start: &str, end: &str) -> TimeBand {
        classify_band(t(start), t(end), &BandBoundaries::default())
    }

    #[test]
    fn test_night_band() {
        assert_eq!(band("00:30", "09:00"), TimeBand::Night);
        assert_eq!(band("01:00", "03:00"), TimeBand::Night);
    }

    #[test]
    fn test_day_band() {
        assert_eq!(band("10:00", "12:00"), TimeBand::Day);
        assert_eq!(band("09:02", "18:00"), TimeBand::Day);
    }

    #[test]
    fn test_evening_band() {
        assert_eq!(band("20:00", "21:00"), TimeBand::Evening);
        assert_eq!(band("18:30", "23:59"), TimeBand::Evening);
    }

    #[test]
    fn test_start_at_midnight_is_not_night() {
        assert_eq!(band("00:00", "08:00"), TimeBand::Evening);
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert_eq!(band("00:01", "08:00"), TimeBand::Evening);
        assert_eq!(band("01:00", "09:01"), TimeBand::Evening);
        assert_eq!(band("09:01", "12:00"), TimeBand::Evening);
        assert_eq!(band("10:00", "18:01"), TimeBand::Evening);
    }

    /// Straddling intervals are charged at the evening rate rather than
    /// being split across bands.
    #[test]
    fn test_straddling_intervals_fall_through_to_evening() {
        assert_eq!(band("09:00", "18:00"), TimeBand::Evening);
        assert_eq!(band("08:00", "10:00"), TimeBand::Evening);
        assert_eq!(band("17:00", "19:00"), TimeBand::Evening);
    }

    #[test]
    fn test_custom_boundaries() {
        let boundaries = BandBoundaries {
            night_start: t("00:00"),
            day_start: t("06:00"),
            evening_start: t("20:00"),
        };
        assert_eq!(
            classify_band(t("06:30"), t("19:00"), &boundaries),
            TimeBand::Day
        );
        assert_eq!(
            classify_band(t("01:00"), t("05:00"), &boundaries),
            TimeBand::Night
        );
    }
}
