//! Operation outcome DTO.

use crate::domain::errors::ApiError;

/// Result of a `try_*` message operation.
///
/// Successful outcomes carry a value and no details; failed outcomes carry a
/// non-empty detail string and no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome<T = ()> {
    value: Option<T>,
    details: Option<String>,
}

impl<T> OperationOutcome<T> {
    /// Creates a successful outcome.
    #[must_use]
    pub const fn succeeded(value: T) -> Self {
        Self {
            value: Some(value),
            details: None,
        }
    }

    /// Creates a failed outcome.
    #[must_use]
    pub fn failed(details: impl Into<String>) -> Self {
        let details: String = details.into();
        let details = if details.is_empty() {
            "operation failed without details".to_string()
        } else {
            details
        };

        Self {
            value: None,
            details: Some(details),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the failure details, `None` on success.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns the payload, `None` on failure.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Converts into a `Result`, using the details as the error message.
    ///
    /// # Errors
    /// Returns [`ApiError::OperationFailed`] when the operation failed.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(ApiError::failed(self.details.unwrap_or_default())),
        }
    }
}
