//! Producers over in-memory inputs: mappings, iterables and single strings.

use serde_json::{Map, Value};

use crate::config::LoaderConfig;
use crate::error::{LoadError, ResolveError, Result};
use crate::format::{Record, SourceKind, csv, json};
use crate::io::{Input, RecordIter};

use super::{BoxedProducer, Producer};

fn mismatch(kind: SourceKind, input: &Input) -> LoadError {
    ResolveError::KindMismatch {
        kind,
        shape: input.shape(),
    }
    .into()
}

/// Yields the mapping itself, once.
pub struct MappingProducer {
    map: Option<Map<String, Value>>,
}

impl MappingProducer {
    pub fn new(map: Map<String, Value>) -> Self {
        Self { map: Some(map) }
    }

    pub(super) fn construct(input: Input, _: &LoaderConfig) -> Result<BoxedProducer> {
        match input {
            Input::Mapping(map) => Ok(Box::new(Self::new(map))),
            other => Err(mismatch(SourceKind::Mapping, &other)),
        }
    }
}

impl Iterator for MappingProducer {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.map.take().map(|map| Ok(Record::from(map)))
    }
}

impl Producer for MappingProducer {
    fn kind(&self) -> SourceKind {
        SourceKind::Mapping
    }
}

/// Passes every element of the wrapped iterator through unchanged.
pub struct IterableProducer {
    items: RecordIter,
}

impl IterableProducer {
    pub fn new(items: RecordIter) -> Self {
        Self { items }
    }

    pub(super) fn construct(input: Input, _: &LoaderConfig) -> Result<BoxedProducer> {
        match input {
            Input::Iterable(items) => Ok(Box::new(Self::new(items))),
            other => Err(mismatch(SourceKind::GenericIterable, &other)),
        }
    }
}

impl Iterator for IterableProducer {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl Producer for IterableProducer {
    fn kind(&self) -> SourceKind {
        SourceKind::GenericIterable
    }
}

/// Decodes the text as one JSON document and yields it.
pub struct JsonTextProducer {
    text: Option<String>,
}

impl JsonTextProducer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub(super) fn construct(input: Input, _: &LoaderConfig) -> Result<BoxedProducer> {
        match input {
            Input::Text(text) => Ok(Box::new(Self::new(text))),
            other => Err(mismatch(SourceKind::JsonText, &other)),
        }
    }
}

impl Iterator for JsonTextProducer {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text.take()?;
        Some(
            json::decode(&text)
                .map(Record::Value)
                .map_err(|e| LoadError::decode("<text>", e)),
        )
    }
}

impl Producer for JsonTextProducer {
    fn kind(&self) -> SourceKind {
        SourceKind::JsonText
    }
}

/// Splits the text on commas and yields the fields as one row.
pub struct CsvTextProducer {
    text: Option<String>,
}

impl CsvTextProducer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub(super) fn construct(input: Input, _: &LoaderConfig) -> Result<BoxedProducer> {
        match input {
            Input::Text(text) => Ok(Box::new(Self::new(text))),
            other => Err(mismatch(SourceKind::CsvText, &other)),
        }
    }
}

impl Iterator for CsvTextProducer {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.text.take().map(|text| Ok(Record::Row(csv::split_row(&text))))
    }
}

impl Producer for CsvTextProducer {
    fn kind(&self) -> SourceKind {
        SourceKind::CsvText
    }
}
