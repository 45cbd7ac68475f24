//! Errors raised by the non-`try` message operations.

use thiserror::Error;

/// Failure of a message operation.
///
/// The message is the same detail string the matching `try_*` call reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The operation failed locally, at the transport or at the API.
    #[error("{details}")]
    OperationFailed {
        /// Human-readable failure detail.
        details: String,
    },
}

impl ApiError {
    /// Creates operation failed error.
    #[must_use]
    pub fn failed(details: impl Into<String>) -> Self {
        Self::OperationFailed {
            details: details.into(),
        }
    }

    /// Returns the failure detail.
    #[must_use]
    pub fn details(&self) -> &str {
        match self {
            Self::OperationFailed { details } => details,
        }
    }
}
