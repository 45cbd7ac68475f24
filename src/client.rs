//! Zulip client facade.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{Messages, RequestDispatcher};
use crate::domain::entities::ClientConfig;
use crate::domain::errors::ConfigError;
use crate::domain::ports::Transport;
use crate::infrastructure::config::zuliprc;
use crate::infrastructure::{CurlTransport, HttpTransport};

/// Authenticated client for one Zulip account.
///
/// The transport is chosen at construction and fixed for the client's
/// lifetime. Cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct ZulipClient {
    config: Arc<ClientConfig>,
    messages: Messages,
}

impl ZulipClient {
    /// Creates a client that talks HTTP in-process.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client from site, email and key.
    ///
    /// # Errors
    /// Returns error naming the first invalid field.
    pub fn from_credentials(
        site: impl AsRef<str>,
        email: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::new(ClientConfig::new(site, email, api_key)?)
    }

    /// Creates a client using a caller-provided `reqwest` client.
    #[must_use]
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> Self {
        let transport = HttpTransport::with_client(&config, client);
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client that sends requests through a curl executable.
    #[must_use]
    pub fn with_curl(config: ClientConfig, program: impl Into<PathBuf>) -> Self {
        let transport = CurlTransport::new(&config, program);
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client over any transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        debug!(site = %config.site(), email = config.email(), "Creating Zulip client");

        Self {
            config: Arc::new(config),
            messages: Messages::new(RequestDispatcher::new(transport)),
        }
    }

    /// Creates an HTTP client from a zuliprc file.
    ///
    /// # Errors
    /// Returns error if the file or its `[api]` section is missing or invalid.
    pub fn from_zuliprc(path: &Path) -> Result<Self, ConfigError> {
        Self::new(zuliprc::load(path)?)
    }

    /// Creates a curl-backed client from a zuliprc file.
    ///
    /// # Errors
    /// Returns error if the file or its `[api]` section is missing or invalid.
    pub fn from_zuliprc_with_curl(
        path: &Path,
        program: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_curl(zuliprc::load(path)?, program))
    }

    /// Returns the message operations.
    #[must_use]
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Returns the validated configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
