//! Configuration types for pay calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML rate table, together with the built-in
//! defaults used when no file is supplied.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer};

use crate::calculation::{DayClass, TimeBand};
use crate::models::parse_clock_time;

/// Start of the night band (exclusive lower bound for `start`).
pub const NIGHT_START: (u32, u32) = (0, 1);
/// Start of the day band; also the exclusive upper bound for night `end`.
pub const DAY_START: (u32, u32) = (9, 1);
/// Start of the evening band; also the exclusive upper bound for day `end`.
pub const EVENING_START: (u32, u32) = (18, 1);

/// Hourly rates for one day class, by time band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BandRates {
    /// Rate for intervals fully inside the night band.
    pub night: u32,
    /// Rate for intervals fully inside the day band.
    pub day: u32,
    /// Rate for everything else.
    pub evening: u32,
}

impl BandRates {
    /// Returns the rate for the given band.
    pub fn for_band(&self, band: TimeBand) -> u32 {
        match band {
            TimeBand::Night => self.night,
            TimeBand::Day => self.day,
            TimeBand::Evening => self.evening,
        }
    }
}

/// Hourly rates for weekdays and weekends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateTable {
    /// Monday through Friday.
    pub weekday: BandRates,
    /// Saturday and Sunday.
    pub weekend: BandRates,
}

impl RateTable {
    /// Looks up the hourly rate for a day class and time band.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_calculator::calculation::{DayClass, TimeBand};
    /// use pay_calculator::config::RateTable;
    ///
    /// let table = RateTable::default();
    /// assert_eq!(table.rate_for(DayClass::Weekday, TimeBand::Day), 15);
    /// assert_eq!(table.rate_for(DayClass::Weekend, TimeBand::Night), 30);
    /// ```
    pub fn rate_for(&self, day_class: DayClass, band: TimeBand) -> u32 {
        match day_class {
            DayClass::Weekday => self.weekday.for_band(band),
            DayClass::Weekend => self.weekend.for_band(band),
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            weekday: BandRates {
                night: 25,
                day: 15,
                evening: 20,
            },
            weekend: BandRates {
                night: 30,
                day: 20,
                evening: 25,
            },
        }
    }
}

/// Boundary times separating the night, day and evening bands.
///
/// Comparisons against these boundaries are strict; see
/// [`classify_band`](crate::calculation::classify_band).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BandBoundaries {
    /// Start of the night band.
    #[serde(deserialize_with = "deserialize_clock_time")]
    pub night_start: NaiveTime,
    /// Start of the day band.
    #[serde(deserialize_with = "deserialize_clock_time")]
    pub day_start: NaiveTime,
    /// Start of the evening band.
    #[serde(deserialize_with = "deserialize_clock_time")]
    pub evening_start: NaiveTime,
}

impl BandBoundaries {
    /// Returns true if the boundaries are in ascending order.
    pub fn is_ordered(&self) -> bool {
        self.night_start < self.day_start && self.day_start < self.evening_start
    }
}

impl Default for BandBoundaries {
    fn default() -> Self {
        Self {
            night_start: boundary(NIGHT_START),
            day_start: boundary(DAY_START),
            evening_start: boundary(EVENING_START),
        }
    }
}

fn boundary((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("Valid boundary time")
}

fn deserialize_clock_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_clock_time(&raw).map_err(serde::de::Error::custom)
}

/// The complete pay configuration: band boundaries plus the rate table.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PayrollConfig {
    /// Time band boundaries.
    #[serde(default)]
    pub boundaries: BandBoundaries,
    /// Hourly rates.
    pub rates: RateTable,
}
