//! Producer over directory trees.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::config::LoaderConfig;
use crate::error::{LoadError, Result};
use crate::format::sniff::{classify_existing, classify_text};
use crate::format::{Record, SourceKind};
use crate::io::{FileInput, Input};

use super::{BoxedProducer, Producer, build, build_path, path_of};

/// Loads every entry of a directory, in file-name order.
///
/// Entries go through the classifier like any other input, so nested
/// directories, gzip files and plain files are all handled. Only one child
/// producer is alive at a time; all of its records are yielded before the
/// next entry is classified.
pub struct DirectoryProducer {
    dir: FileInput,
    config: LoaderConfig,
    entries: Option<std::vec::IntoIter<PathBuf>>,
    current: Option<BoxedProducer>,
    done: bool,
}

impl DirectoryProducer {
    pub fn new(path: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        Self {
            dir: FileInput::new(path),
            config,
            entries: None,
            current: None,
            done: false,
        }
    }

    pub(super) fn construct(input: Input, config: &LoaderConfig) -> Result<BoxedProducer> {
        let path = path_of(SourceKind::Directory, input)?;
        Ok(Box::new(Self::new(path, config.clone())))
    }

    fn fail(&mut self, error: LoadError) -> Option<Result<Record>> {
        self.done = true;
        self.current = None;
        self.entries = None;
        Some(Err(error))
    }

    fn open_child(&self, entry: PathBuf) -> Result<BoxedProducer> {
        match entry.to_str() {
            Some(text) => {
                let kind = classify_text(text);
                debug!(dir = self.dir.id(), entry = text, %kind, "loading directory entry");
                build(kind, Input::Text(text.to_owned()), &self.config)
            }
            None => {
                let kind = classify_existing(&entry).unwrap_or(SourceKind::CsvFile);
                debug!(
                    dir = self.dir.id(),
                    entry = %entry.display(),
                    %kind,
                    "loading directory entry"
                );
                build_path(kind, entry, &self.config)
            }
        }
    }
}

impl Iterator for DirectoryProducer {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(child) = self.current.as_mut() {
                match child.next() {
                    Some(Ok(record)) => return Some(Ok(record)),
                    Some(Err(e)) => return self.fail(e),
                    None => self.current = None,
                }
            }
            if self.done {
                return None;
            }
            if self.entries.is_none() {
                match self.dir.list_sorted() {
                    Ok(listed) => self.entries = Some(listed.into_iter()),
                    Err(e) => return self.fail(LoadError::list(self.dir.id(), e)),
                }
            }
            let next_entry = self.entries.as_mut().and_then(Iterator::next);
            let Some(entry) = next_entry else {
                self.done = true;
                self.entries = None;
                return None;
            };
            if !self.config.includes(&entry) {
                trace!(entry = %entry.display(), "skipping filtered entry");
                continue;
            }
            match self.open_child(entry) {
                Ok(child) => self.current = Some(child),
                Err(e) => return self.fail(e),
            }
        }
    }
}

impl Producer for DirectoryProducer {
    fn kind(&self) -> SourceKind {
        SourceKind::Directory
    }
}
