//! Loader options.

use std::path::Path;

use serde::Deserialize;

use super::EntryFilter;
use crate::error::ConfigError;

/// Options that shape how directories are traversed.
///
/// The default includes every entry. Options apply at every directory level
/// reached while recursing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Skip entries whose file name starts with `.`
    pub skip_hidden: bool,
    /// Only load regular files carrying one of these extensions
    /// (case-insensitive). Subdirectories are always descended.
    pub include_extensions: Option<Vec<String>>,
    /// Arbitrary inclusion predicate, applied after the options above
    #[serde(skip)]
    pub filter: Option<EntryFilter>,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(EntryFilter::new(predicate));
        self
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse options from a YAML document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Whether the directory entry at `path` takes part in loading.
    pub fn includes(&self, path: &Path) -> bool {
        if self.skip_hidden && is_hidden(path) {
            return false;
        }
        if let Some(extensions) = &self.include_extensions {
            if path.is_file() && !has_extension(path, extensions) {
                return false;
            }
        }
        self.filter.as_ref().is_none_or(|f| f.accepts(path))
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
}
