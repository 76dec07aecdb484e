//! Error types for the compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the numeral, structuring, formatting and configuration
//! layers can report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the compensation engine.
///
/// All fallible operations return this error type. Callers are expected to
/// surface `InvalidAmount` and `ParseError` as validation messages.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::ParseError {
///     token: "fourty".to_string(),
///     message: "unrecognised word".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot parse amount words at 'fourty': unrecognised word");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A numeric input was negative, non-finite, too precise or too large.
    #[error("Invalid amount '{value}': {message}")]
    InvalidAmount {
        /// The rejected value as supplied.
        value: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// A words phrase could not be parsed back into a number.
    #[error("Cannot parse amount words at '{token}': {message}")]
    ParseError {
        /// The offending token (empty when the phrase itself is empty).
        token: String,
        /// A description of the parse failure.
        message: String,
    },

    /// An amount exceeds the magnitude supported by word conversion.
    #[error("Amount {value} exceeds the supported maximum of {limit}")]
    RangeError {
        /// The amount that was out of range.
        value: String,
        /// The exclusive upper bound.
        limit: String,
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

    /// No allowance rate table is effective on the requested date.
    #[error("No allowance rates effective on {date}")]
    RateNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },
}

impl EngineError {
    pub(crate) fn invalid_amount(value: impl ToString, message: impl Into<String>) -> Self {
        EngineError::InvalidAmount {
            value: value.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn parse(token: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::ParseError {
            token: token.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
