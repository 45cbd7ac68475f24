//! Validated client credentials.

use std::fmt;

use url::Url;
use zeroize::Zeroizing;

use super::BasicAuth;
use crate::domain::errors::{ConfigError, ConfigField};

/// Site, user email and API key for one Zulip account.
///
/// Every field is validated at construction and never changes afterwards.
#[derive(Clone)]
pub struct ClientConfig {
    site: Url,
    email: String,
    api_key: Zeroizing<String>,
    auth: BasicAuth,
}

impl ClientConfig {
    /// Validates and builds the configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first invalid field,
    /// checked in the order site, email, key.
    pub fn new(
        site: impl AsRef<str>,
        email: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let site = parse_site(site.as_ref())?;

        let email: String = email.into();
        if email.is_empty() {
            return Err(ConfigError::invalid(ConfigField::Email, "must not be empty"));
        }
        if !email.contains('@') {
            return Err(ConfigError::invalid(ConfigField::Email, "must contain '@'"));
        }

        let api_key: Zeroizing<String> = Zeroizing::new(api_key.into());
        if api_key.is_empty() {
            return Err(ConfigError::invalid(ConfigField::ApiKey, "must not be empty"));
        }

        let auth = BasicAuth::new(&email, &api_key);

        Ok(Self {
            site,
            email,
            api_key,
            auth,
        })
    }

    /// Returns the site base URL.
    #[must_use]
    pub const fn site(&self) -> &Url {
        &self.site
    }

    /// Returns the user email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the Basic credential derived at construction.
    #[must_use]
    pub const fn auth(&self) -> &BasicAuth {
        &self.auth
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("site", &self.site.as_str())
            .field("email", &self.email)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

fn parse_site(site: &str) -> Result<Url, ConfigError> {
    if site.is_empty() {
        return Err(ConfigError::invalid(ConfigField::Site, "must not be empty"));
    }

    let url = Url::parse(site)
        .map_err(|e| ConfigError::invalid(ConfigField::Site, format!("not an absolute URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::invalid(
            ConfigField::Site,
            format!("unsupported scheme `{other}`"),
        )),
    }
}
