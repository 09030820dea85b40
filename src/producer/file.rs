//! Producers over plain text files: JSON lines and comma-delimited rows.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::PathBuf;

use crate::config::LoaderConfig;
use crate::error::{LoadError, Result};
use crate::format::{Record, SourceKind, csv, json};
use crate::io::{FileInput, Input};

use super::{BoxedProducer, Producer, SourceState, path_of};

/// Decodes every line of a file as an independent JSON document.
///
/// A line that fails to decode ends the iteration with a `Decode` error
/// naming the line.
pub struct JsonLinesFileProducer {
    file: FileInput,
    line_no: usize,
    state: SourceState<Lines<BufReader<File>>>,
}

impl JsonLinesFileProducer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FileInput::new(path),
            line_no: 0,
            state: SourceState::Pending,
        }
    }

    pub(super) fn construct(input: Input, _: &LoaderConfig) -> Result<BoxedProducer> {
        let path = path_of(SourceKind::JsonLinesFile, input)?;
        Ok(Box::new(Self::new(path)))
    }
}

impl Iterator for JsonLinesFileProducer {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            file,
            line_no,
            state,
        } = self;
        state.pull(
            || {
                file.open_text()
                    .map(BufRead::lines)
                    .map_err(|e| LoadError::open(file.id(), e))
            },
            |lines| {
                let line = lines.next()?;
                *line_no += 1;
                Some(match line {
                    Ok(line) => json::decode(&line)
                        .map(Record::Value)
                        .map_err(|e| LoadError::decode(format!("{}:{}", file.id(), line_no), e)),
                    Err(e) => Err(LoadError::read(file.id(), e)),
                })
            },
        )
    }
}

impl Producer for JsonLinesFileProducer {
    fn kind(&self) -> SourceKind {
        SourceKind::JsonLinesFile
    }
}

/// Yields every line of a file split on commas, blank lines included.
pub struct CsvFileProducer {
    file: FileInput,
    state: SourceState<Lines<BufReader<File>>>,
}

impl CsvFileProducer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FileInput::new(path),
            state: SourceState::Pending,
        }
    }

    pub(super) fn construct(input: Input, _: &LoaderConfig) -> Result<BoxedProducer> {
        let path = path_of(SourceKind::CsvFile, input)?;
        Ok(Box::new(Self::new(path)))
    }
}

impl Iterator for CsvFileProducer {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { file, state } = self;
        state.pull(
            || {
                file.open_text()
                    .map(BufRead::lines)
                    .map_err(|e| LoadError::open(file.id(), e))
            },
            |lines| {
                let line = lines.next()?;
                Some(
                    line.map(|line| Record::Row(csv::split_row(&line)))
                        .map_err(|e| LoadError::read(file.id(), e)),
                )
            },
        )
    }
}

impl Producer for CsvFileProducer {
    fn kind(&self) -> SourceKind {
        SourceKind::CsvFile
    }
}
