//! Computed pay totals.

use std::fmt;

use serde::Serialize;

use crate::report::format_payment;

/// The total pay computed for one employee line.
///
/// Displays as the report line, e.g. `The amount to pay TEST is: 55 USD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayRecord {
    /// The employee name.
    pub employee: String,
    /// Total pay in whole currency units.
    pub total: u64,
}

impl PayRecord {
    /// Creates a new record.
    pub fn new(employee: impl Into<String>, total: u64) -> Self {
        Self {
            employee: employee.into(),
            total,
        }
    }
}

impl fmt::Display for PayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_payment(&self.employee, self.total))
    }
}
