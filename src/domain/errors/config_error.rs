//! Configuration error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Credential field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    /// Site base URL.
    Site,
    /// User email address.
    Email,
    /// API key.
    ApiKey,
}

impl ConfigField {
    /// Returns the zuliprc key name for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Email => "email",
            Self::ApiKey => "key",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Configuration error variants. All of them are fatal at construction.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: ConfigField, reason: String },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("file: {} does not contain [{section}] data", path.display())]
    MissingSection { path: PathBuf, section: String },

    #[error("file: {} does not contain a `{key}` value", path.display())]
    MissingKey { path: PathBuf, key: String },

    #[error("could not find a zuliprc file starting from {}", start.display())]
    ZuliprcNotFound { start: PathBuf },

    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates invalid field error.
    #[must_use]
    pub fn invalid(field: ConfigField, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the offending field for validation errors.
    #[must_use]
    pub const fn field(&self) -> Option<ConfigField> {
        match self {
            Self::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }
}
