//! Minimal INI reader for zuliprc files.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::domain::errors::ConfigError;

const COMMENT_PREFIXES: [char; 2] = ['#', ';'];

/// Key/value pairs of one INI section. Key lookup is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    entries: HashMap<String, String>,
}

impl IniSection {
    /// Returns the value for `key`, ignoring case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
    }
}

/// Extracts section `name` from INI `contents`.
///
/// Returns `None` when the section header never appears. A header followed by
/// no entries yields an empty section. Comment lines and lines without a
/// delimiter are skipped; duplicate keys keep the last value.
#[must_use]
pub fn section(contents: &str, name: &str) -> Option<IniSection> {
    let header = format!("[{name}]");
    let mut found = false;
    let mut data = IniSection::default();

    for line in contents.lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if !found {
            found = line.eq_ignore_ascii_case(&header);
            continue;
        }

        if line.starts_with('[') {
            break;
        }

        if line.starts_with(&COMMENT_PREFIXES[..]) {
            continue;
        }

        if let Some((key, value)) = line.split_once('=').or_else(|| line.split_once(':')) {
            data.insert(key, value);
        }
    }

    found.then_some(data)
}

/// Reads `path` and extracts section `name`.
///
/// # Errors
/// Returns [`ConfigError::FileNotFound`] if the file does not exist, or
/// [`ConfigError::Io`] if it cannot be read.
pub fn section_from_file(path: &Path, name: &str) -> Result<Option<IniSection>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io(e)
        }
    })?;

    Ok(section(&contents, name))
}
