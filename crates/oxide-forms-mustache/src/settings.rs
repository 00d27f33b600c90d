//! Engine configuration from application settings.
//!
//! Two keys are recognized:
//!
//! - `mustache.forms`: template directories, separated by commas or the
//!   platform path-list separator. Defaults to `.`.
//! - `mustache.search`: base directories for relative `mustache.forms`
//!   entries, separated the same way. Defaults to `.`.
//!
//! An absolute entry is used as-is. A relative entry yields one directory
//! per base directory. Existing directories are canonicalized.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::engine::{configure, MustacheEngine};

/// Settings key listing template directories.
pub const FORMS_KEY: &str = "mustache.forms";

/// Settings key listing base directories for relative entries.
pub const SEARCH_KEY: &str = "mustache.search";

/// Splits a settings value into entries. Blank entries are dropped.
pub fn split_entries(value: &str) -> Vec<String> {
    value
        .split(',')
        .flat_map(|part| env::split_paths(part).collect::<Vec<_>>())
        .map(|path| path.to_string_lossy().trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Resolves one `mustache.forms` entry against the base directories.
pub fn resolve_search_path(entry: &str, search: &[PathBuf]) -> Vec<PathBuf> {
    let path = Path::new(entry);
    let candidates = if path.is_absolute() {
        vec![path.to_path_buf()]
    } else {
        search.iter().map(|base| base.join(path)).collect()
    };
    candidates
        .into_iter()
        .map(|candidate| fs::canonicalize(&candidate).unwrap_or(candidate))
        .collect()
}

/// Template directory settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MustacheSettings {
    forms: Vec<String>,
    search: Vec<PathBuf>,
}

impl Default for MustacheSettings {
    fn default() -> Self {
        Self {
            forms: vec![".".to_string()],
            search: vec![PathBuf::from(".")],
        }
    }
}

impl MustacheSettings {
    /// Empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the recognized keys from a settings mapping. Other keys are
    /// ignored.
    pub fn from_map<I, K, V>(settings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut out = Self::default();
        for (key, value) in settings {
            match key.as_ref() {
                FORMS_KEY => out.forms = split_entries(value.as_ref()),
                SEARCH_KEY => {
                    out.search = split_entries(value.as_ref())
                        .into_iter()
                        .map(PathBuf::from)
                        .collect();
                }
                _ => {}
            }
        }
        if out.forms.is_empty() {
            out.forms.push(".".to_string());
        }
        out
    }

    /// Sets the `mustache.forms` entries.
    #[must_use]
    pub fn forms<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forms = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the base directories for relative entries.
    #[must_use]
    pub fn search<I, P>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search = directories.into_iter().map(Into::into).collect();
        self
    }

    /// Raw `mustache.forms` entries.
    pub fn form_entries(&self) -> &[String] {
        &self.forms
    }

    /// Parsed `mustache.search` directories.
    pub fn search_directories(&self) -> &[PathBuf] {
        &self.search
    }

    /// Every template directory, in order.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.forms
            .iter()
            .flat_map(|entry| resolve_search_path(entry, &self.search))
            .collect()
    }
}

/// Installs the process-wide engine from settings.
pub fn configure_from_settings(settings: &MustacheSettings) -> Arc<MustacheEngine> {
    let directories = settings.directories();
    debug!(?directories, "resolved template directories from settings");
    configure(directories)
}
