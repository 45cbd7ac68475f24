//! HTTP Basic credential value object.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Pre-encoded `email:key` credential for the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    encoded: String,
}

impl BasicAuth {
    /// Encodes the credential pair.
    #[must_use]
    pub fn new(email: &str, api_key: &str) -> Self {
        Self {
            encoded: STANDARD.encode(format!("{email}:{api_key}")),
        }
    }

    /// Returns the base64 token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Returns the full `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.encoded)
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.encoded.len() <= 10 {
            return "*".repeat(self.encoded.len());
        }

        let visible_prefix = &self.encoded[..4];
        format!("{visible_prefix}...")
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("encoded", &self.masked())
            .finish()
    }
}

impl fmt::Display for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Basic {}", self.masked())
    }
}
