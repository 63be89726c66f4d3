//! Error types for the Wage Progression Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around the progression
//! calculation. The calculation itself is total and never fails; errors
//! arise from configuration loading and from resolving a tier selection.

use thiserror::Error;

/// The main error type for the Wage Progression Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tarif_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// Pay grade code was not found in the agreement configuration.
    #[error("Pay grade not found: {grade}")]
    GradeNotFound {
        /// The pay grade code that was not found.
        grade: String,
    },

    /// The requested step does not exist within the pay grade.
    #[error("Step {step} not found in pay grade '{grade}'")]
    StepNotFound {
        /// The pay grade code.
        grade: String,
        /// The step number that was not found.
        step: u32,
    },

    /// A tier selection field was invalid or inconsistent.
    #[error("Invalid selection field '{field}': {message}")]
    InvalidSelection {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
