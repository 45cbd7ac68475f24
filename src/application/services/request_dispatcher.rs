//! Sends API calls through the configured transport.

use std::sync::Arc;

use tracing::{debug, warn};

use super::response_normalizer::normalize;
use crate::application::dto::NormalizedResponse;
use crate::domain::ports::{FormData, HttpMethod, Transport};

/// Issues exactly one transport call per request and normalizes the result.
#[derive(Clone)]
pub struct RequestDispatcher {
    transport: Arc<dyn Transport>,
}

impl RequestDispatcher {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Performs the call. Never fails; see [`NormalizedResponse`].
    pub async fn request(&self, method: HttpMethod, path: &str, form: &FormData) -> NormalizedResponse {
        debug!(%method, path, fields = form.len(), "Sending API request");

        let raw = self.transport.execute(method, path, form).await;
        let response = normalize(raw);

        if response.is_transport_success() {
            debug!(
                %method,
                path,
                status = response.http_status,
                body = %response.body,
                "Received API response"
            );
        } else {
            warn!(
                %method,
                path,
                failure = %response.failure_message(),
                "API request failed"
            );
        }

        response
    }
}
