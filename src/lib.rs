//! # anyload
//!
//! Format-agnostic data loading.
//!
//! ## Overview
//!
//! anyload takes "some data, from somewhere" and yields its records lazily:
//! - **Sniffing**: an input is classified into exactly one [`SourceKind`] by
//!   probing it in a fixed priority order
//! - **Uniform records**: JSON sources yield JSON values, CSV sources yield
//!   rows of strings, in-memory inputs pass through unchanged
//! - **Recursion**: directories and gzip files classify their entries and lines
//!   through the same machinery
//! - **Laziness**: nothing is read before a record is pulled, and handles are
//!   closed on exhaustion, on error, or when the loader is dropped
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anyload::{DataLoader, Record, SourceKind};
//!
//! fn main() -> Result<(), anyload::LoadError> {
//!     // JSON text
//!     let loader = DataLoader::new(r#"{"a": 1}"#)?;
//!     assert_eq!(loader.kind(), SourceKind::JsonText);
//!
//!     // A directory of .jsonl, .csv and .gz files
//!     for record in DataLoader::new("data/")? {
//!         match record? {
//!             Record::Value(value) => println!("json: {value}"),
//!             Record::Row(fields) => println!("csv: {fields:?}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Classification order
//!
//! 1. mapping → `Mapping`
//! 2. text that decodes as JSON → `JsonText` (even if it also names a file)
//! 3. text naming a regular file → `CompressedFile`, `JsonLinesFile` (first
//!    line is JSON) or `CsvFile`
//! 4. text naming any other existing entry → `Directory`
//! 5. iterable → `GenericIterable`
//! 6. anything else → `CsvText`
//!
//! ## Errors
//!
//! Every error surfaces from the `next()` call that hit it and ends the
//! iteration: a bad JSON line or an unreadable nested file aborts the whole
//! traversal. Nothing is skipped or retried.
//!
//! ## Features
//!
//! - `yaml` - parse [`LoaderConfig`] from YAML
//! - `miette` - pretty error reporting with miette

pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod loader;
pub mod producer;

pub use builder::LoaderBuilder;
pub use config::{EntryFilter, LoaderConfig};
pub use error::{ConfigError, LoadError, ResolveError, Result, Stage};
pub use format::sniff::{classify, classify_line};
pub use format::{Record, SourceKind};
pub use io::{FileInput, Input};
pub use loader::DataLoader;
pub use producer::{BoxedProducer, Producer, build};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::LoadDiagnostic;

/// Classify `input` and load it with the default options.
pub fn load(input: impl Into<Input>) -> Result<DataLoader> {
    DataLoader::new(input)
}
