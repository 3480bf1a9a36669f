//! Error types for the Tip Pool Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while splitting a tip pool.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Tip Pool Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tip_pool_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/denominations.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/denominations.yaml"
/// );
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

    /// A rate calculation was requested with no workers registered.
    #[error("Cannot compute a rate for an empty worker list")]
    EmptyWorkerList,

    /// The total hours across all workers was zero or negative.
    #[error("Total hours must be greater than zero, got {total_hours}")]
    NonPositiveHours {
        /// The total hours that were supplied.
        total_hours: Decimal,
    },

    /// A worker record was invalid or contained inconsistent data.
    #[error("Invalid worker '{name}': {message}")]
    InvalidWorker {
        /// The name of the invalid worker (may be empty).
        name: String,
        /// A description of what made the worker invalid.
        message: String,
    },

    /// A rounded payout target was negative and cannot be paid in cash.
    #[error("Worker '{worker}' has a negative payout target of {target}")]
    NegativeTarget {
        /// The name of the worker with the negative target.
        worker: String,
        /// The negative rounded target.
        target: i64,
    },

    /// The denomination set was empty, contained zero, or was not
    /// strictly descending.
    #[error("Invalid denomination set: {message}")]
    InvalidDenominations {
        /// A description of what made the set invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// An internal invariant was violated. This indicates a defect in the
    /// engine, not bad input; it is surfaced loudly rather than clamped.
    #[error("Internal invariant violated: {message}")]
    InternalInvariant {
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
