//! Probe primitives.
//!
//! Each probe answers yes or no. Failures inside a probe (missing files,
//! unreadable bytes, parse errors) are a "no", never an error for the caller.

use std::io::{BufRead, Read};
use std::path::Path;

use crate::io::FileInput;

use super::json;

/// True iff `text` decodes as one JSON document.
pub fn probe_json(text: &str) -> bool {
    json::validate(text).is_ok()
}

/// True iff `path` opens as a gzip stream and a one-byte read succeeds.
///
/// The read checks the gzip header, so a well-formed but empty stream passes
/// while a zero-byte file does not.
pub fn probe_compressed(path: &Path) -> bool {
    let Ok(mut reader) = FileInput::new(path).open_compressed() else {
        return false;
    };
    let mut byte = [0u8; 1];
    reader.read(&mut byte).is_ok()
}

/// True iff the first line of the file at `path` decodes as JSON.
///
/// Only the first line is read; later lines are checked when they are
/// produced.
pub fn probe_json_lines_file(path: &Path) -> bool {
    let Ok(mut reader) = FileInput::new(path).open_text() else {
        return false;
    };
    let mut first = String::new();
    match reader.read_line(&mut first) {
        Ok(_) => probe_json(&first),
        Err(_) => false,
    }
}

/// True iff `path` names an existing regular file (symlinks followed).
pub fn is_regular_file(path: &Path) -> bool {
    path.is_file()
}

/// True iff `path` names an existing filesystem entry of any kind.
pub fn exists(path: &Path) -> bool {
    path.exists()
}
