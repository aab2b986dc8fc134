//! # Error Types
//!
//! Structured error types for calc_core. The calculators themselves never
//! fail: unparseable input becomes `0.0` and singular formulas pass IEEE
//! infinities through to the formatter. Errors only arise around the
//! calculations, when equipment ratings or JSON requests are loaded.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_rated_power(rated_power_mva: f64) -> CalcResult<()> {
//!     if rated_power_mva <= 0.0 {
//!         return Err(CalcError::InvalidRating {
//!             field: "rated_power_mva".to_string(),
//!             value: rated_power_mva.to_string(),
//!             reason: "Rated power must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for ratings and request handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An equipment rating is unusable (zero divisor, non-finite, etc.)
    #[error("Invalid rating '{field}': {value} - {reason}")]
    InvalidRating {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// TOML or JSON could not be parsed into the expected shape
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidRating error
    pub fn invalid_rating(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidRating {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidRating { .. } => "INVALID_RATING",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_rating("rated_power_mva", "0", "Rated power must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidRating\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::serialization("bad toml").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::file_error("open", "x.toml", "missing").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::invalid_rating("parallel_cables", "0", "At least one cable is required");
        assert_eq!(
            error.to_string(),
            "Invalid rating 'parallel_cables': 0 - At least one cable is required"
        );
    }
}
