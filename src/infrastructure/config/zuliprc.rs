//! Loading credentials from zuliprc files.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::{debug, info};

use super::ini;
use crate::domain::entities::ClientConfig;
use crate::domain::errors::ConfigError;

/// Section holding API credentials.
pub const API_SECTION: &str = "api";

const ZULIPRC_FILE_NAME: &str = "zuliprc";
const SECRETS_DIR_NAME: &str = "secrets";
const HOME_ZULIPRC_FILE_NAME: &str = ".zuliprc";

/// Loads and validates the `[api]` section of a zuliprc file.
///
/// # Errors
/// Returns error if the file is missing or unreadable, lacks the `[api]`
/// section or one of `email`, `key`, `site`, or holds invalid values.
pub fn load(path: &Path) -> Result<ClientConfig, ConfigError> {
    debug!(path = %path.display(), "Loading zuliprc");

    let api = ini::section_from_file(path, API_SECTION)?.ok_or_else(|| {
        ConfigError::MissingSection {
            path: path.to_path_buf(),
            section: API_SECTION.to_string(),
        }
    })?;

    let require = |key: &str| {
        api.get(key)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::MissingKey {
                path: path.to_path_buf(),
                key: key.to_string(),
            })
    };

    let email = require("email")?;
    let key = require("key")?;
    let site = require("site")?;

    let config = ClientConfig::new(site, email, key)?;

    info!(site = %config.site(), email = config.email(), "Loaded credentials from zuliprc");

    Ok(config)
}

/// Finds a zuliprc file.
///
/// Walks from `start_dir` towards the filesystem root, checking `zuliprc`
/// and `secrets/zuliprc` in each directory, then falls back to `~/.zuliprc`.
///
/// # Errors
/// Returns [`ConfigError::ZuliprcNotFound`] if no candidate exists.
pub fn find(start_dir: &Path) -> Result<PathBuf, ConfigError> {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().join(HOME_ZULIPRC_FILE_NAME));
    find_with_home(start_dir, home.as_deref())
}

fn find_with_home(start_dir: &Path, home_zuliprc: Option<&Path>) -> Result<PathBuf, ConfigError> {
    for dir in start_dir.ancestors() {
        let candidates = [
            dir.join(ZULIPRC_FILE_NAME),
            dir.join(SECRETS_DIR_NAME).join(ZULIPRC_FILE_NAME),
        ];

        if let Some(found) = candidates.into_iter().find(|path| path.is_file()) {
            debug!(path = %found.display(), "Found zuliprc");
            return Ok(found);
        }
    }

    home_zuliprc
        .filter(|path| path.is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| ConfigError::ZuliprcNotFound {
            start: start_dir.to_path_buf(),
        })
}
