//! Error types for the Workforce Analytics Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its loading layer can report. Empty
//! collections are never an error: every aggregator defines a zero result.

use thiserror::Error;

/// The main error type for the Workforce Analytics Engine.
///
/// # Example
///
/// ```
/// use workforce_analytics::error::EngineError;
///
/// let error = EngineError::MalformedDate {
///     employee_id: "EMP0125".to_string(),
///     entity: "Leave".to_string(),
///     field: "Leave_Start_Date".to_string(),
///     value: "not-a-date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed date in Leave of employee 'EMP0125': field 'Leave_Start_Date' has value 'not-a-date'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A data or configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A data or configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date field could not be parsed.
    #[error(
        "Malformed date in {entity} of employee '{employee_id}': field '{field}' has value '{value}'"
    )]
    MalformedDate {
        /// The employee owning the record.
        employee_id: String,
        /// The kind of record (e.g. "Leave", "Sentiment").
        entity: String,
        /// The wire name of the offending field.
        field: String,
        /// The raw value as found in the data.
        value: String,
    },

    /// The same employee identifier was supplied more than once.
    #[error("Duplicate employee identifier: {id}")]
    DuplicateEmployee {
        /// The repeated identifier.
        id: String,
    },

    /// No employee with the given identifier exists in the record store.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
