//! Unified error types for the mast workspace
//!
//! This module provides a common error type [`MastError`] that can represent
//! errors from any part of the system. Domain-specific error types can be
//! converted to `MastError` for uniform error handling at API boundaries.
//!
//! The repair algorithms themselves are total functions and never produce
//! errors; this type exists for the outer layers (scenario loading,
//! validation, reporting).

use thiserror::Error;

/// Unified error type for all mast operations.
#[derive(Error, Debug)]
pub enum MastError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Scenario validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using MastError.
pub type MastResult<T> = Result<T, MastError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for MastError {
    fn from(err: anyhow::Error) -> Self {
        MastError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for MastError {
    fn from(s: String) -> Self {
        MastError::Other(s)
    }
}

impl From<&str> for MastError {
    fn from(s: &str) -> Self {
        MastError::Other(s.to_string())
    }
}

// JSON parsing errors
impl From<serde_json::Error> for MastError {
    fn from(err: serde_json::Error) -> Self {
        MastError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MastError::Validation("duplicate receiver id 3".into());
        assert!(err.to_string().contains("Validation error"));
        assert!(err.to_string().contains("duplicate receiver id 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let mast_err: MastError = io_err.into();
        assert!(matches!(mast_err, MastError::Io(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> MastResult<()> {
            Err(MastError::Parse("bad scenario".into()))
        }

        fn outer() -> MastResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
