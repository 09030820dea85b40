//! Error types for anyload.
//!
//! This module provides:
//! - `Stage`: Indicates where a failure happened while loading
//! - `LoadError`: A single failure with the target it happened on
//! - `ResolveError`: An input that cannot back the requested source kind
//! - `ConfigError`: Loader configuration that failed to parse

use std::fmt;

use thiserror::Error;

use crate::format::SourceKind;

/// Convenience result type for loading operations.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Building a producer for a classified input
    Resolve,
    /// Error while opening a file or compressed stream
    Open,
    /// Error while listing a directory
    List,
    /// Error while reading lines from an open handle
    Read,
    /// A record that should be JSON failed to decode
    Decode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "Resolve"),
            Stage::Open => write!(f, "Open"),
            Stage::List => write!(f, "List"),
            Stage::Read => write!(f, "Read"),
            Stage::Decode => write!(f, "Decode"),
        }
    }
}

#[derive(Debug)]
pub struct LoadError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the target (file path, `path:line`, `<text>`, ...)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl LoadError {
    pub fn new(
        stage: Stage,
        target: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            stage,
            target: target.into(),
            error: error.into(),
        }
    }

    pub fn open(target: impl Into<String>, error: std::io::Error) -> Self {
        Self::new(Stage::Open, target, error)
    }

    pub fn list(target: impl Into<String>, error: std::io::Error) -> Self {
        Self::new(Stage::List, target, error)
    }

    pub fn read(
        target: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::new(Stage::Read, target, error)
    }

    pub fn decode(target: impl Into<String>, error: serde_json::Error) -> Self {
        Self::new(Stage::Decode, target, error)
    }

    /// True when a record expected to be JSON failed to parse.
    pub fn is_decode(&self) -> bool {
        self.stage == Stage::Decode
    }

    /// True when a path could not be opened, listed or read.
    pub fn is_resource(&self) -> bool {
        matches!(self.stage, Stage::Open | Stage::List | Stage::Read)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

impl From<ResolveError> for LoadError {
    fn from(error: ResolveError) -> Self {
        let target = match &error {
            ResolveError::KindMismatch { shape, .. } => format!("<{shape}>"),
        };
        Self::new(Stage::Resolve, target, error)
    }
}

/// Raised when a producer is requested for an input that cannot back it.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("a {shape} input cannot be loaded as {kind}")]
    KindMismatch {
        kind: SourceKind,
        shape: &'static str,
    },
}

/// Errors raised while parsing a loader configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
