//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rule sets or
//! prorating vacation periods.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The payslip
/// calculation itself is infallible by design: malformed numeric inputs are
/// sanitized to zero before the formulas run.
///
/// # Example
///
/// ```
/// use folha_engine::error::EngineError;
///
/// let error = EngineError::RuleSetNotFound {
///     path: "/missing/2026.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rule set file not found: /missing/2026.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rule set file was not found at the specified path.
    #[error("Rule set file not found: {path}")]
    RuleSetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rule set file could not be parsed or failed validation.
    #[error("Failed to parse rule set '{path}': {message}")]
    RuleSetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },

    /// Vacation proration was requested without a reference month.
    #[error("Vacation proration requires a reference month")]
    MissingReferenceMonth,

    /// Vacation proration was requested without a start/return day.
    #[error("Vacation proration requires a start or return day")]
    MissingVacationDay,

    /// Departing-mode proration was requested without a vacation length.
    #[error("Departing-on-vacation proration requires a vacation length in days")]
    MissingVacationLength,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
