//! Payroll calculator for day/time-banded hourly schedules.
//!
//! This crate parses schedule lines such as `ASTRID=MO10:00-12:00,SU20:00-21:00`,
//! prices each worked interval by day class (weekday or weekend) and time band
//! (night, day or evening), and reports the total owed to each employee.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
