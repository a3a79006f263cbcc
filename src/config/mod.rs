//! Configuration loading and management for the pay calculator.
//!
//! This module provides the rate table and time band boundaries, either
//! from built-in defaults or loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use pay_calculator::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
//! println!("Weekend night rate: {}", loader.config().rates.weekend.night);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    BandBoundaries, BandRates, DAY_START, EVENING_START, NIGHT_START, PayrollConfig, RateTable,
};
