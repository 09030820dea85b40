use std::fs;

use serde_json::json;

use crate::config::LoaderConfig;
use crate::error::Stage;
use crate::format::{Record, SourceKind};
use crate::io::Input;
use crate::producer::{CsvFileProducer, JsonLinesFileProducer, build};
use crate::tests::support::{
    CSV_LINES, JSON_LINES, csv_records, json_records, path_str, row, write_file,
};

#[test]
fn json_lines_file_yields_each_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "json_file", JSON_LINES);

    let records: Vec<Record> = JsonLinesFileProducer::new(path)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records, json_records());
}

#[test]
fn json_lines_file_fails_on_first_bad_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "json_file",
        "{\"a\": 1}\nnot json\n{\"a\": 3}\n",
    );

    let mut producer = JsonLinesFileProducer::new(&path);
    assert_eq!(producer.next().unwrap().unwrap(), Record::Value(json!({"a": 1})));

    let err = producer.next().unwrap().expect_err("second line is not JSON");
    assert_eq!(err.stage, Stage::Decode);
    assert_eq!(err.target, format!("{}:2", path.display()));

    // No partial recovery: the third line is never produced.
    assert!(producer.next().is_none());
}

#[test]
fn csv_file_yields_split_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "csv_file", CSV_LINES);

    let records: Vec<Record> = CsvFileProducer::new(path)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records, csv_records());
}

#[test]
fn csv_file_rows_may_differ_in_length() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "csv_file", "a,1\nb\n\"c,d\",e\n");

    let records: Vec<Record> = CsvFileProducer::new(path)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        records,
        vec![
            row(&["a", "1"]),
            row(&["b"]),
            row(&["\"c", "d\"", "e"]),
        ]
    );
}

#[test]
fn file_is_not_opened_until_first_pull() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "json_file", JSON_LINES);

    let mut producer = build(
        SourceKind::JsonLinesFile,
        Input::from(path_str(&path)),
        &LoaderConfig::default(),
    )
    .unwrap();

    // Removed between classification and production.
    fs::remove_file(&path).unwrap();

    let err = producer.next().unwrap().expect_err("file is gone");
    assert_eq!(err.stage, Stage::Open);
    assert!(err.is_resource());
    assert!(producer.next().is_none());
}

#[test]
fn csv_file_keeps_blank_lines_as_empty_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "csv_file", "a,1\n\nb,2\n");

    let records: Vec<Record> = CsvFileProducer::new(path)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records, vec![row(&["a", "1"]), row(&[""]), row(&["b", "2"])]);
}

#[test]
fn csv_file_strips_crlf_terminators() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "csv_file", "a,1\r\nb,2\r\n");

    let records: Vec<Record> = CsvFileProducer::new(path)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records, csv_records());
}
