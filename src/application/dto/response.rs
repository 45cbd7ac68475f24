//! Normalized API response.

/// API result string reported by successful calls.
pub const RESULT_SUCCESS: &str = "success";

/// Uniform view of one API exchange.
///
/// Transport success (a well-formed JSON body came back) and API success
/// (`result == "success"`) are tracked separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedResponse {
    /// True when the exchange produced a parsable JSON body.
    pub transport_ok: bool,
    /// Transport or parse failure description.
    pub failure: Option<String>,
    pub result: Option<String>,
    pub msg: Option<String>,
    pub code: Option<String>,
    pub id: Option<u64>,
    /// Delivery time of scheduled messages.
    pub deliver_at: Option<String>,
    pub uri: Option<String>,
    pub stream: Option<String>,
    pub rendered: Option<String>,
    /// HTTP status, 0 when the transport has none.
    pub http_status: u16,
    /// Raw response body, kept for diagnostics.
    pub body: String,
}

impl NormalizedResponse {
    #[must_use]
    pub const fn is_transport_success(&self) -> bool {
        self.transport_ok
    }

    /// Returns true when the API reported `result: success`.
    #[must_use]
    pub fn is_api_success(&self) -> bool {
        self.result.as_deref() == Some(RESULT_SUCCESS)
    }

    /// Describes why the call did not succeed.
    #[must_use]
    pub fn failure_message(&self) -> String {
        if let Some(failure) = self.failure.as_deref().filter(|f| !f.is_empty()) {
            return failure.to_string();
        }

        match self.result.as_deref() {
            None | Some("") => format!("HTTP request failed: {}", self.http_status),
            Some(result) => format!(
                "result: {result}, code: {}, message: {}",
                self.code.as_deref().unwrap_or_default(),
                self.msg.as_deref().unwrap_or_default()
            ),
        }
    }
}
