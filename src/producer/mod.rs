//! Record producers, one per `SourceKind`.
//!
//! A producer is a lazy, forward-only iterator of records bound to a single
//! input. Nothing is opened or read until the first record is pulled, and a
//! producer stops for good after yielding its first error.
//!
//! `build` is the dispatch table from a classified kind to the constructor
//! of its producer. Composite producers (directories, compressed files) call
//! back into the classifier and `build` for every nested item.

mod compressed;
mod directory;
mod file;
mod memory;

use std::path::PathBuf;

use crate::config::LoaderConfig;
use crate::error::{ResolveError, Result};
use crate::format::{Record, SourceKind};
use crate::io::Input;

pub use compressed::CompressedFileProducer;
pub use directory::DirectoryProducer;
pub use file::{CsvFileProducer, JsonLinesFileProducer};
pub use memory::{CsvTextProducer, IterableProducer, JsonTextProducer, MappingProducer};

/// A lazy sequence of records from one classified input.
pub trait Producer: Iterator<Item = Result<Record>> + Send {
    /// The kind of source this producer reads.
    fn kind(&self) -> SourceKind;
}

pub type BoxedProducer = Box<dyn Producer>;

type Constructor = fn(Input, &LoaderConfig) -> Result<BoxedProducer>;

fn constructor(kind: SourceKind) -> Constructor {
    match kind {
        SourceKind::Mapping => MappingProducer::construct,
        SourceKind::GenericIterable => IterableProducer::construct,
        SourceKind::JsonText => JsonTextProducer::construct,
        SourceKind::CsvText => CsvTextProducer::construct,
        SourceKind::JsonLinesFile => JsonLinesFileProducer::construct,
        SourceKind::CsvFile => CsvFileProducer::construct,
        SourceKind::CompressedFile => CompressedFileProducer::construct,
        SourceKind::Directory => DirectoryProducer::construct,
    }
}

/// Build the producer for `kind` around `input`.
///
/// Fails only when the input's shape cannot back the kind, e.g. a mapping
/// handed to the directory producer.
pub fn build(kind: SourceKind, input: Input, config: &LoaderConfig) -> Result<BoxedProducer> {
    constructor(kind)(input, config)
}

/// Build the producer for `kind` around a filesystem path.
pub(crate) fn build_path(
    kind: SourceKind,
    path: PathBuf,
    config: &LoaderConfig,
) -> Result<BoxedProducer> {
    match kind {
        SourceKind::JsonLinesFile => Ok(Box::new(JsonLinesFileProducer::new(path))),
        SourceKind::CsvFile => Ok(Box::new(CsvFileProducer::new(path))),
        SourceKind::CompressedFile => Ok(Box::new(CompressedFileProducer::new(
            path,
            config.clone(),
        ))),
        SourceKind::Directory => Ok(Box::new(DirectoryProducer::new(path, config.clone()))),
        other => build(other, Input::Text(path.to_string_lossy().into_owned()), config),
    }
}

/// Take the path out of a text input, or fail with a shape mismatch.
fn path_of(kind: SourceKind, input: Input) -> Result<PathBuf> {
    match input {
        Input::Text(text) => Ok(PathBuf::from(text)),
        other => Err(ResolveError::KindMismatch {
            kind,
            shape: other.shape(),
        }
        .into()),
    }
}

/// Producer-side state of a lazily opened handle.
///
/// The handle is opened on the first pull and dropped as soon as it is
/// exhausted or fails, so nothing stays open past the end of iteration.
pub(crate) enum SourceState<S> {
    Pending,
    Active(S),
    Finished,
}

impl<S> SourceState<S> {
    pub(crate) fn pull<T, O, F>(&mut self, open: O, step: F) -> Option<Result<T>>
    where
        O: FnOnce() -> Result<S>,
        F: FnOnce(&mut S) -> Option<Result<T>>,
    {
        if let SourceState::Pending = self {
            match open() {
                Ok(handle) => *self = SourceState::Active(handle),
                Err(e) => {
                    *self = SourceState::Finished;
                    return Some(Err(e));
                }
            }
        }
        let SourceState::Active(handle) = self else {
            return None;
        };
        match step(handle) {
            Some(Ok(item)) => Some(Ok(item)),
            Some(Err(e)) => {
                *self = SourceState::Finished;
                Some(Err(e))
            }
            None => {
                *self = SourceState::Finished;
                None
            }
        }
    }
}
