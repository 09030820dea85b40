//! The classifier: decides which `SourceKind` an input represents.
//!
//! Probes run in a fixed priority order and the first success wins:
//!
//! 1. a mapping is a `Mapping`;
//! 2. a string that decodes as JSON is `JsonText`, even if it also names a path;
//! 3. a string naming a regular file is a `CompressedFile`, a `JsonLinesFile`
//!    or, failing both probes, a `CsvFile`;
//! 4. a string naming any other existing entry is a `Directory`;
//! 5. an iterable is a `GenericIterable`;
//! 6. anything left is `CsvText`.
//!
//! Classification is total and never fails.

use std::path::Path;

use tracing::{debug, trace};

use crate::io::Input;

use super::SourceKind;
use super::probe::{exists, is_regular_file, probe_compressed, probe_json, probe_json_lines_file};

const PREVIEW_CHARS: usize = 64;

/// Classify an arbitrary input.
pub fn classify(input: &Input) -> SourceKind {
    let kind = match input {
        Input::Mapping(_) => SourceKind::Mapping,
        Input::Text(text) => classify_text(text),
        Input::Iterable(_) => SourceKind::GenericIterable,
    };
    debug!(shape = input.shape(), %kind, "classified input");
    kind
}

/// Classify a string that may be JSON, a path, or a CSV row.
pub fn classify_text(text: &str) -> SourceKind {
    if probe_json(text) {
        return SourceKind::JsonText;
    }
    match classify_existing(Path::new(text)) {
        Some(kind) => kind,
        None => {
            trace!(text = %preview(text), "not JSON and not a path, falling back to CSV");
            SourceKind::CsvText
        }
    }
}

/// Classify a single line read out of a compressed file.
///
/// Lines are never interpreted as paths: a line is JSON or it is a CSV row.
pub fn classify_line(line: &str) -> SourceKind {
    if probe_json(line) {
        SourceKind::JsonText
    } else {
        SourceKind::CsvText
    }
}

/// Classify `path` by what is on disk, or `None` if nothing exists there.
pub fn classify_existing(path: &Path) -> Option<SourceKind> {
    if is_regular_file(path) {
        Some(classify_file(path))
    } else if exists(path) {
        Some(SourceKind::Directory)
    } else {
        None
    }
}

fn classify_file(path: &Path) -> SourceKind {
    if probe_compressed(path) {
        SourceKind::CompressedFile
    } else if probe_json_lines_file(path) {
        SourceKind::JsonLinesFile
    } else {
        SourceKind::CsvFile
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
