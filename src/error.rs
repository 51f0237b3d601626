//! Error types for the cinema pricing engine.
//!
//! Pricing itself has exactly one failure mode, [`ValidationError`]. Loading
//! configuration can fail in a few more ways, collected in [`EngineError`].

use thiserror::Error;

/// Rejection of an order request.
///
/// Raised when the ticket type is unknown, the quantity is not a positive
/// whole number, or the day is not one of the seven recognised day names.
/// The error deliberately carries no field-level detail.
///
/// # Example
///
/// ```
/// use cinema_pricing::error::ValidationError;
///
/// assert_eq!(ValidationError.to_string(), "invalid input");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid input")]
pub struct ValidationError;

/// Errors raised while loading configuration or server settings.
///
/// Order rejections never pass through this type; they stay a plain
/// [`ValidationError`].
///
/// # Example
///
/// ```
/// use cinema_pricing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
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

    /// Configuration parsed but breaks a pricing invariant.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
