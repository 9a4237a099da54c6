//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing salaries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{RateKind, WorkCategory};

/// The main error type for the payroll engine.
///
/// Every fallible operation in the engine returns this error type, so callers
/// can decide on user-facing messaging in one place.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use payroll_engine::models::RateKind;
///
/// let error = EngineError::RateNotConfigured {
///     kind: RateKind::Private,
/// };
/// assert_eq!(error.to_string(), "No private rate configured");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// No rate set of the requested kind has been recorded yet.
    #[error("No {kind} rate configured")]
    RateNotConfigured {
        /// The kind of rate that was requested.
        kind: RateKind,
    },

    /// A work record carried a negative quantity.
    #[error("Invalid quantity {quantity} for '{category}' on {date}")]
    InvalidQuantity {
        /// The date of the offending record.
        date: NaiveDate,
        /// The category holding the negative quantity.
        category: WorkCategory,
        /// The rejected quantity.
        quantity: i64,
    },

    /// A rate set or a record-local rate was negative.
    #[error("Invalid rate {rate} for '{category}'")]
    InvalidRate {
        /// The category the rate applies to.
        category: WorkCategory,
        /// The rejected rate.
        rate: Decimal,
    },

    /// The cash residual of a payment split came out negative.
    #[error("Inconsistent totals: cash residual is {cash}")]
    InconsistentTotals {
        /// The negative cash figure.
        cash: Decimal,
    },

    /// A date range ended before it started.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A day's salary could not be shared because nobody was present.
    #[error("No employees present on {date}")]
    NoEmployeesPresent {
        /// The day with no attendance.
        date: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
