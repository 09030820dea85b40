use std::env;
use std::path::{Path, PathBuf};

use serde_json::{Map, json};

use crate::format::{Record, SourceKind};
use crate::format::sniff::{classify, classify_line, classify_text};
use crate::io::Input;
use crate::loader::DataLoader;
use crate::tests::support::{CSV_LINES, JSON_LINES, path_str, write_file, write_gz};

#[test]
fn classify_in_memory_inputs() {
    assert_eq!(classify(&Input::Mapping(Map::new())), SourceKind::Mapping);
    assert_eq!(
        classify(&Input::from(vec![json!(1), json!(2)])),
        SourceKind::GenericIterable
    );
    assert_eq!(classify(&Input::from(r#"{"a": 1}"#)), SourceKind::JsonText);
    assert_eq!(classify(&Input::from("a,b,c")), SourceKind::CsvText);
    assert_eq!(classify(&Input::from("")), SourceKind::CsvText);
}

#[test]
fn classify_json_values_by_shape() {
    assert_eq!(classify(&Input::from(json!({"a": 1}))), SourceKind::Mapping);
    assert_eq!(classify(&Input::from(json!([1, 2]))), SourceKind::GenericIterable);
    assert_eq!(classify(&Input::from(json!(7))), SourceKind::JsonText);
    assert_eq!(classify(&Input::from(json!("x,y"))), SourceKind::CsvText);
}

#[test]
fn classify_files_by_content() {
    let dir = tempfile::tempdir().unwrap();
    let gz = write_gz(dir.path(), "gz_file", JSON_LINES);
    let jsonl = write_file(dir.path(), "json_file", JSON_LINES);
    let csv = write_file(dir.path(), "csv_file", CSV_LINES);
    // Extensions are not consulted.
    let misnamed = write_file(dir.path(), "data.csv", JSON_LINES);

    assert_eq!(classify_text(&path_str(&gz)), SourceKind::CompressedFile);
    assert_eq!(classify_text(&path_str(&jsonl)), SourceKind::JsonLinesFile);
    assert_eq!(classify_text(&path_str(&csv)), SourceKind::CsvFile);
    assert_eq!(classify_text(&path_str(&misnamed)), SourceKind::JsonLinesFile);
    assert_eq!(classify_text(&path_str(dir.path())), SourceKind::Directory);
}

/// Runs with the working directory set to `dir`, restoring it afterwards.
struct CwdGuard(PathBuf);

impl CwdGuard {
    fn enter(dir: &Path) -> Self {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self(previous)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

#[test]
fn json_text_wins_over_an_existing_path() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "42", CSV_LINES);
    write_file(dir.path(), "[1]", JSON_LINES);
    let _cwd = CwdGuard::enter(dir.path());

    assert!(Path::new("42").is_file());
    assert!(Path::new("[1]").is_file());
    assert_eq!(classify_text("42"), SourceKind::JsonText);
    assert_eq!(classify_text("[1]"), SourceKind::JsonText);

    let records = DataLoader::new("42").unwrap().collect_records().unwrap();
    assert_eq!(records, vec![Record::Value(json!(42))]);
}

#[test]
fn classify_missing_path_falls_back_to_csv_text() {
    let dir = tempfile::tempdir().unwrap();
    let missing = path_str(&dir.path().join("nothing_here"));
    assert_eq!(classify_text(&missing), SourceKind::CsvText);
}

#[test]
fn classify_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let jsonl = path_str(&write_file(dir.path(), "json_file", JSON_LINES));

    for text in [jsonl.as_str(), r#"[1, 2]"#, "x,y"] {
        let first = classify(&Input::from(text));
        let second = classify(&Input::from(text));
        assert_eq!(first, second);
    }
}

#[test]
fn classify_line_never_touches_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let jsonl = path_str(&write_file(dir.path(), "json_file", JSON_LINES));

    assert_eq!(classify_line(r#"{"a": 1}"#), SourceKind::JsonText);
    assert_eq!(classify_line("a,1"), SourceKind::CsvText);
    assert_eq!(classify_line(&jsonl), SourceKind::CsvText);
}
