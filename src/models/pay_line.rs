//! Pay line parsing.
//!
//! A pay line has the form `NAME=TOKEN[,TOKEN...]`, where each token is an
//! interval such as `MO10:00-12:00`.

use crate::error::{PayrollError, PayrollResult};

/// A raw input line split into the employee name and its interval tokens.
///
/// Tokens are kept in input order and are not decoded here; see
/// [`decode_interval`](super::decode_interval).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayLine {
    /// The employee name (everything before `=`).
    pub employee: String,
    /// The interval tokens (the `,`-separated parts after `=`).
    pub tokens: Vec<String>,
}

impl PayLine {
    /// Parses a raw line, trimming surrounding whitespace first.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InputFormat`] unless the line contains exactly
    /// one `=`.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_calculator::models::PayLine;
    ///
    /// let line = PayLine::parse("ASTRID=MO10:00-12:00,SU20:00-21:00\n").unwrap();
    /// assert_eq!(line.employee, "ASTRID");
    /// assert_eq!(line.tokens, vec!["MO10:00-12:00", "SU20:00-21:00"]);
    /// ```
    pub fn parse(raw: &str) -> PayrollResult<Self> {
        let raw = raw.trim();
        let parts: Vec<&str> = raw.split('=').collect();

        if parts.len() != 2 {
            return Err(PayrollError::input_format(
                raw,
                "expected exactly one '=' between name and schedule",
            ));
        }

        Ok(Self {
            employee: parts[0].to_string(),
            tokens: parts[1].split(',').map(str::to_string).collect(),
        })
    }
}
