//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{LoadError, Stage};

/// A diagnostic wrapper for load errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct LoadDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Resolve => "Classify the input first and build the producer for that kind",
        Stage::Open | Stage::List => {
            "The path existed when it was classified; check it was not moved or made unreadable"
        }
        Stage::Read => "Check the file is UTF-8 text or a well-formed gzip stream",
        Stage::Decode => "Every line of a JSON-lines file must be a complete JSON document",
    }
}

impl From<LoadError> for LoadDiagnostic {
    fn from(e: LoadError) -> Self {
        LoadDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            help: Some(help_for(e.stage).into()),
            source: Some(e.error),
            severity: Severity::Error,
        }
    }
}

impl From<LoadError> for miette::Report {
    fn from(e: LoadError) -> Self {
        miette::Report::new(LoadDiagnostic::from(e))
    }
}
