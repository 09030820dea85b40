//! On-disk fixtures shared by the tests.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use serde_json::json;

use crate::format::Record;

pub(crate) const JSON_LINES: &str = "{\"a\": 1, \"b\": 2}\n{\"a\": 1, \"b\": 4}\n";
pub(crate) const CSV_LINES: &str = "a,1\nb,2\n";

pub(crate) fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub(crate) fn write_gz(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    fs::write(&path, encoder.finish().unwrap()).unwrap();
    path
}

pub(crate) fn path_str(path: &Path) -> String {
    path.to_str().expect("temp paths are UTF-8").to_owned()
}

pub(crate) fn json_records() -> Vec<Record> {
    vec![
        Record::Value(json!({"a": 1, "b": 2})),
        Record::Value(json!({"a": 1, "b": 4})),
    ]
}

pub(crate) fn row(fields: &[&str]) -> Record {
    Record::Row(fields.iter().map(|f| f.to_string()).collect())
}

pub(crate) fn csv_records() -> Vec<Record> {
    vec![row(&["a", "1"]), row(&["b", "2"])]
}
