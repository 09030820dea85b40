//! Builder for creating DataLoader instances.

use std::path::Path;

use crate::config::LoaderConfig;
use crate::error::Result;
use crate::format::SourceKind;
use crate::io::Input;
use crate::loader::DataLoader;

#[derive(Debug, Clone, Default)]
pub struct LoaderBuilder {
    config: LoaderConfig,
    kind: Option<SourceKind>,
}

impl LoaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one parsed from a file.
    pub fn from_config(config: LoaderConfig) -> Self {
        Self { config, kind: None }
    }

    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.config.skip_hidden = skip;
        self
    }

    pub fn include_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.with_extensions(extensions);
        self
    }

    /// Only load directory entries for which `predicate` returns true.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.config = self.config.with_filter(predicate);
        self
    }

    /// Load the input as `kind` instead of classifying it.
    pub fn with_kind(mut self, kind: SourceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn build(self, input: impl Into<Input>) -> Result<DataLoader> {
        match self.kind {
            Some(kind) => DataLoader::from_kind(kind, input.into(), &self.config),
            None => DataLoader::with_config(input, &self.config),
        }
    }
}
