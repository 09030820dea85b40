//! Producer over gzip files whose lines are JSON documents or CSV rows.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::PathBuf;

use flate2::read::MultiGzDecoder;
use tracing::trace;

use crate::config::LoaderConfig;
use crate::error::{LoadError, Result};
use crate::format::sniff::classify_line;
use crate::format::{Record, SourceKind};
use crate::io::{FileInput, Input};

use super::{BoxedProducer, Producer, SourceState, build, path_of};

/// Decompresses a gzip file line by line.
///
/// Each line is classified on its own (JSON, otherwise a CSV row) and handed
/// to a fresh single-record producer of that kind.
pub struct CompressedFileProducer {
    file: FileInput,
    config: LoaderConfig,
    state: SourceState<Lines<BufReader<MultiGzDecoder<File>>>>,
}

impl CompressedFileProducer {
    pub fn new(path: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        Self {
            file: FileInput::new(path),
            config,
            state: SourceState::Pending,
        }
    }

    pub(super) fn construct(input: Input, config: &LoaderConfig) -> Result<BoxedProducer> {
        let path = path_of(SourceKind::CompressedFile, input)?;
        Ok(Box::new(Self::new(path, config.clone())))
    }
}

impl Iterator for CompressedFileProducer {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            file,
            config,
            state,
        } = self;
        state.pull(
            || {
                file.open_compressed()
                    .map(BufRead::lines)
                    .map_err(|e| LoadError::open(file.id(), e))
            },
            |lines| match lines.next()? {
                Ok(line) => {
                    let kind = classify_line(&line);
                    trace!(file = file.id(), %kind, "classified compressed line");
                    match build(kind, Input::Text(line), config) {
                        Ok(mut single) => single.next(),
                        Err(e) => Some(Err(e)),
                    }
                }
                Err(e) => Some(Err(LoadError::read(file.id(), e))),
            },
        )
    }
}

impl Producer for CompressedFileProducer {
    fn kind(&self) -> SourceKind {
        SourceKind::CompressedFile
    }
}
