//! Transport that shells out to a curl-compatible executable.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};
use url::Url;
use zeroize::Zeroizing;

use crate::domain::entities::ClientConfig;
use crate::domain::ports::{FormData, HttpMethod, RawTransportResult, Transport};

/// Runs `<program> -X <METHOD> <url> -u <email>:<key> --data-urlencode k=v ...`
/// and treats stdout as the response body.
///
/// There is no HTTP status on this path, so results always report status 0.
pub struct CurlTransport {
    program: PathBuf,
    site: Url,
    credentials: Zeroizing<String>,
}

impl CurlTransport {
    #[must_use]
    pub fn new(config: &ClientConfig, program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            site: config.site().clone(),
            credentials: Zeroizing::new(format!("{}:{}", config.email(), config.api_key())),
        }
    }

    /// Builds the argument list for one request.
    #[must_use]
    pub fn build_args(&self, method: HttpMethod, url: &Url, form: &FormData) -> Vec<String> {
        let mut args = vec![
            "-X".to_string(),
            method.as_str().to_string(),
            url.as_str().to_string(),
            "-u".to_string(),
            (*self.credentials).clone(),
        ];

        for (key, value) in form.iter() {
            args.push("--data-urlencode".to_string());
            args.push(format!("{key}={value}"));
        }

        args
    }
}

#[async_trait]
impl Transport for CurlTransport {
    async fn execute(&self, method: HttpMethod, path: &str, form: &FormData) -> RawTransportResult {
        let url = match self.site.join(path) {
            Ok(url) => url,
            Err(e) => return RawTransportResult::failed(format!("invalid request URL `{path}`: {e}")),
        };

        debug!(program = %self.program.display(), %method, %url, "Running curl request");

        let output = Command::new(&self.program)
            .args(self.build_args(method, &url, form))
            .stdin(Stdio::null())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                warn!(program = %self.program.display(), error = %e, "Failed to launch curl");
                return RawTransportResult::failed(format!(
                    "failed to launch {}: {e}",
                    self.program.display()
                ));
            }
        };

        let body = String::from_utf8_lossy(&output.stdout).into_owned();
        let errors = String::from_utf8_lossy(&output.stderr);

        if body.is_empty() {
            let errors = errors.trim();
            let detail = if errors.is_empty() {
                "curl returned no data!".to_string()
            } else {
                errors.to_string()
            };
            warn!(status = ?output.status, detail = %detail, "curl produced no output");
            return RawTransportResult::failed(detail);
        }

        if !body.starts_with('{') {
            warn!("curl returned non-JSON data");
            return RawTransportResult::failed_with_body("curl returned non-JSON data!", body);
        }

        RawTransportResult::response(0, body)
    }
}
