//! Converts raw transport results into [`NormalizedResponse`] values.

use serde::Deserialize;
use tracing::warn;

use crate::application::dto::NormalizedResponse;
use crate::domain::ports::RawTransportResult;

/// Zulip API response body. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ApiResponseBody {
    result: Option<String>,
    msg: Option<String>,
    code: Option<String>,
    id: Option<u64>,
    deliver_at: Option<String>,
    uri: Option<String>,
    stream: Option<String>,
    rendered: Option<String>,
}

/// Normalizes a raw transport result. Never fails.
#[must_use]
pub fn normalize(raw: RawTransportResult) -> NormalizedResponse {
    let RawTransportResult {
        status,
        body,
        failure,
    } = raw;

    if let Some(failure) = failure {
        return NormalizedResponse {
            transport_ok: false,
            failure: Some(failure),
            http_status: status,
            body,
            ..Default::default()
        };
    }

    match serde_json::from_str::<ApiResponseBody>(&body) {
        Ok(parsed) => NormalizedResponse {
            transport_ok: true,
            failure: None,
            result: parsed.result,
            msg: parsed.msg,
            code: parsed.code,
            id: parsed.id,
            deliver_at: parsed.deliver_at,
            uri: parsed.uri,
            stream: parsed.stream,
            rendered: parsed.rendered,
            http_status: status,
            body,
        },
        Err(e) => {
            warn!(status, error = %e, "Failed to parse API response");
            NormalizedResponse {
                transport_ok: false,
                failure: Some(format!("failed to parse response: {e}")),
                http_status: status,
                body,
                ..Default::default()
            }
        }
    }
}
