//! Error types for the pay calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while parsing schedules, loading
//! configuration, or reading input files.

use thiserror::Error;

/// The main error type for the pay calculator.
///
/// # Example
///
/// ```
/// use pay_calculator::error::PayrollError;
///
/// let error = PayrollError::UnknownDay {
///     code: "MI".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown day of week: MI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// A line or interval token did not match the expected format.
    #[error("Input format could not be processed '{input}': {message}")]
    InputFormat {
        /// The offending line or token.
        input: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// An interval token started with an unrecognized day code.
    #[error("Unknown day of week: {code}")]
    UnknownDay {
        /// The two leading characters of the token.
        code: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The schedule input file could not be read.
    #[error("Failed to read input file '{path}': {message}")]
    InputFileError {
        /// The path of the input file.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// A report line could not be written to the output.
    #[error("Failed to write report: {message}")]
    OutputError {
        /// The underlying I/O error.
        message: String,
    },
}

impl PayrollError {
    /// Builds a [`PayrollError::InputFormat`] from anything string-like.
    pub fn input_format(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputFormat {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
