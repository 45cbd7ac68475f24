//! Transport port definition.

use std::fmt;

use async_trait::async_trait;

/// HTTP method of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form-encoded request payload, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    /// Creates an empty payload.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Appends a field when the value is present.
    pub fn push_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Returns the value of the first field named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the pairs as a slice, suitable for form encoding.
    #[must_use]
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Raw outcome of one exchange, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTransportResult {
    /// HTTP status, 0 when the transport has none.
    pub status: u16,
    /// Response body, possibly empty.
    pub body: String,
    /// Transport-level failure description.
    pub failure: Option<String>,
}

impl RawTransportResult {
    /// A completed exchange.
    #[must_use]
    pub fn response(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            failure: None,
        }
    }

    /// A transport failure without any body.
    #[must_use]
    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            status: 0,
            body: String::new(),
            failure: Some(detail.into()),
        }
    }

    /// A transport failure that still produced output worth keeping.
    #[must_use]
    pub fn failed_with_body(detail: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status: 0,
            body: body.into(),
            failure: Some(detail.into()),
        }
    }
}

/// Port performing one HTTP-shaped exchange against the Zulip site.
///
/// Implementations never return errors: every failure is described in the
/// returned [`RawTransportResult`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `form` to `path`, relative to the site base URL.
    async fn execute(&self, method: HttpMethod, path: &str, form: &FormData) -> RawTransportResult;
}
