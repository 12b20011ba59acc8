//! Typed operation outcomes.
//!
//! Every client call resolves to an [`Outcome`], a success payload or a
//! structured [`OperationError`], so failures travel as ordinary values
//! between components instead of raised faults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifies what went wrong with an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// A required credential is missing or blank; detected before any network I/O
    Config,
    /// Transport failure, non-success status, timeout, or unparseable response
    Provider,
    /// Rejected input (e.g. blank company name); caught at the boundary
    Validation,
}

impl ErrorKind {
    /// Short label used in user-facing messages and logs
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config => "configuration error",
            Self::Provider => "provider error",
            Self::Validation => "validation error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Structured failure returned by client and orchestrator operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct OperationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl OperationError {
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Config,
            message: message.into(),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Provider,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// True when this failure was detected before any network call
    pub const fn is_pre_flight(&self) -> bool {
        matches!(self.kind, ErrorKind::Config | ErrorKind::Validation)
    }
}

/// Uniform result type for both client calls
pub type Outcome<T> = Result<T, OperationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_kind_and_message() {
        let err = OperationError::config("SERPAPI_KEY is not set");
        assert_eq!(err.to_string(), "configuration error: SERPAPI_KEY is not set");

        let err = OperationError::provider("HTTP 500");
        assert_eq!(err.to_string(), "provider error: HTTP 500");
    }

    #[test]
    fn test_pre_flight_classification() {
        assert!(OperationError::config("x").is_pre_flight());
        assert!(OperationError::validation("x").is_pre_flight());
        assert!(!OperationError::provider("x").is_pre_flight());
    }

    #[test]
    fn test_outcome_is_ordinary_result() {
        let ok: Outcome<Vec<String>> = Ok(vec!["headline".to_string()]);
        assert_eq!(ok.as_deref().map(<[String]>::len), Ok(1));
    }
}
