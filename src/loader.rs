//! The loader facade: classify an input, build its producer, pull records.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::config::LoaderConfig;
use crate::error::{LoadError, Result, Stage};
use crate::format::{Record, SourceKind, sniff};
use crate::io::Input;
use crate::producer::{self, BoxedProducer};

/// Loads records from any supported input.
///
/// Construction classifies the input and builds the matching producer; no
/// file is opened until the first record is pulled. Dropping the loader
/// releases whatever handle is open at that point.
pub struct DataLoader {
    kind: SourceKind,
    target: String,
    producer: BoxedProducer,
}

impl DataLoader {
    /// Classify `input` and prepare to load it with the default options.
    pub fn new(input: impl Into<Input>) -> Result<Self> {
        Self::with_config(input, &LoaderConfig::default())
    }

    /// Classify `input` and prepare to load it with `config`.
    pub fn with_config(input: impl Into<Input>, config: &LoaderConfig) -> Result<Self> {
        let input = input.into();
        let kind = sniff::classify(&input);
        Self::from_kind(kind, input, config)
    }

    /// Load `input` as `kind`, skipping classification.
    pub fn from_kind(kind: SourceKind, input: Input, config: &LoaderConfig) -> Result<Self> {
        let target = input.id();
        let producer = producer::build(kind, input, config)?;
        Ok(Self {
            kind,
            target,
            producer,
        })
    }

    /// The kind the input was loaded as.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Identifier of the input (its text or path, or `<mapping>` / `<iterable>`).
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Decode every record into `T`.
    ///
    /// A record that does not fit `T` is reported as a `Decode` error and
    /// ends the iteration, like any other error.
    pub fn records_as<T>(self) -> impl Iterator<Item = Result<T>>
    where
        T: DeserializeOwned,
    {
        let target = self.target;
        let mut producer = self.producer;
        let mut failed = false;
        std::iter::from_fn(move || {
            if failed {
                return None;
            }
            let item = producer.next()?.and_then(|record| {
                record
                    .deserialize_into::<T>()
                    .map_err(|e| LoadError::new(Stage::Decode, target.as_str(), e))
            });
            failed = item.is_err();
            Some(item)
        })
    }

    /// Pull every record, stopping at the first error.
    pub fn collect_records(self) -> Result<Vec<Record>> {
        self.collect()
    }
}

impl Iterator for DataLoader {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.producer.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.producer.size_hint()
    }
}

impl fmt::Debug for DataLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataLoader")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
