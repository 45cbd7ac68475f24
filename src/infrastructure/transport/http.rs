//! In-process HTTP transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, header};
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::ClientConfig;
use crate::domain::errors::ConfigError;
use crate::domain::ports::{FormData, HttpMethod, RawTransportResult, Transport};

const USER_AGENT: &str = concat!("zulip-client-rs/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport backed by a `reqwest` client.
pub struct HttpTransport {
    client: Client,
    site: Url,
    auth_header: String,
}

impl HttpTransport {
    /// Creates transport with a default HTTP client.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self::with_client(config, client))
    }

    /// Creates transport using the given HTTP client.
    #[must_use]
    pub fn with_client(config: &ClientConfig, client: Client) -> Self {
        Self {
            client,
            site: config.site().clone(),
            auth_header: config.auth().header_value(),
        }
    }

    /// Resolves `path` against the site URL.
    ///
    /// # Errors
    /// Returns error if the joined URL is invalid.
    pub fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        self.site.join(path)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn describe_send_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("failed to connect: {e}")
    } else {
        e.to_string()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, method: HttpMethod, path: &str, form: &FormData) -> RawTransportResult {
        let url = match self.resolve(path) {
            Ok(url) => url,
            Err(e) => return RawTransportResult::failed(format!("invalid request URL `{path}`: {e}")),
        };

        debug!(%method, %url, "HTTP request");

        let mut request = self
            .client
            .request(to_reqwest_method(method), url)
            .header(header::AUTHORIZATION, &self.auth_header);

        if !form.is_empty() {
            request = request.form(form.as_pairs());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Failed to reach Zulip site");
                return RawTransportResult::failed(describe_send_error(&e));
            }
        };

        let status = response.status().as_u16();

        match response.text().await {
            Ok(body) => RawTransportResult::response(status, body),
            Err(e) => {
                warn!(status, error = %e, "Failed to read response body");
                RawTransportResult {
                    status,
                    body: String::new(),
                    failure: Some(format!("failed to read response body: {e}")),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config(site: &str) -> ClientConfig {
        ClientConfig::new(site, "zulip@example.org", "KeyInBase64").unwrap()
    }

    #[test]
    fn test_transport_creation() {
        assert!(HttpTransport::new(&config("https://zulip.example.org")).is_ok());
    }

    #[test]
    fn test_resolves_relative_paths() {
        let transport = HttpTransport::new(&config("https://zulip.example.org")).unwrap();

        assert_eq!(
            transport.resolve("api/v1/messages/5").unwrap().as_str(),
            "https://zulip.example.org/api/v1/messages/5"
        );
    }

    #[test]
    fn test_resolves_under_site_directory() {
        let transport = HttpTransport::new(&config("https://example.org/chat/")).unwrap();

        assert_eq!(
            transport.resolve("api/v1/messages").unwrap().as_str(),
            "https://example.org/chat/api/v1/messages"
        );
    }

    #[tokio::test]
    async fn test_sends_basic_auth_and_form_body() {
        let server = MockServer::start().await;
        let config = config(&server.uri());
        let error_body = r#"{"result":"error","msg":"Invalid email 'a@b.org'","code":"BAD_REQUEST"}"#;

        Mock::given(method("POST"))
            .and(path("/api/v1/messages"))
            .and(header("authorization", config.auth().header_value().as_str()))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("to=a%40b.org&content=x+%26+y%3Dz"))
            .respond_with(ResponseTemplate::new(400).set_body_string(error_body))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&config).unwrap();
        let mut form = FormData::new();
        form.push("to", "a@b.org");
        form.push("content", "x & y=z");

        let raw = transport.execute(HttpMethod::Post, "api/v1/messages", &form).await;

        assert_eq!(raw.status, 400);
        assert_eq!(raw.body, error_body);
        assert!(raw.failure.is_none());
    }

    #[tokio::test]
    async fn test_delete_without_form_sends_no_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/messages/42"))
            .and(body_string(""))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"result":"success","msg":""}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&config(&server.uri())).unwrap();

        let raw = transport
            .execute(HttpMethod::Delete, "api/v1/messages/42", &FormData::new())
            .await;

        assert_eq!(raw.status, 200);
        assert!(raw.failure.is_none());
    }

    #[tokio::test]
    async fn test_connection_failure_is_captured() {
        // Port 9 on localhost is the discard service and is normally closed.
        let transport = HttpTransport::new(&config("http://127.0.0.1:9")).unwrap();

        let raw = transport
            .execute(HttpMethod::Post, "api/v1/messages", &FormData::new())
            .await;

        assert_eq!(raw.status, 0);
        assert!(raw.failure.is_some());
    }
}
