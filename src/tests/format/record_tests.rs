use serde_json::json;

use crate::format::csv::split_row;
use crate::format::{Record, SourceKind};
use crate::tests::support::row;

#[test]
fn split_row_strips_line_terminator_only() {
    assert_eq!(split_row("a,1\n"), vec!["a", "1"]);
    assert_eq!(split_row("a,1\r\n"), vec!["a", "1"]);
    assert_eq!(split_row(" a , 1 "), vec![" a ", " 1 "]);
    assert_eq!(split_row("a,,b"), vec!["a", "", "b"]);
    assert_eq!(split_row(""), vec![""]);
}

#[test]
fn split_row_does_not_honour_quotes() {
    assert_eq!(split_row(r#""x,y",z"#), vec![r#""x"#, r#"y""#, "z"]);
}

#[test]
fn record_accessors() {
    let value = Record::Value(json!({"a": 1}));
    let fields = row(&["a", "1"]);

    assert_eq!(value.as_value(), Some(&json!({"a": 1})));
    assert!(value.as_row().is_none());
    assert_eq!(fields.as_row(), Some(&["a".to_string(), "1".to_string()][..]));
    assert!(fields.as_value().is_none());
}

#[test]
fn rows_convert_to_string_arrays() {
    assert_eq!(row(&["a", "1"]).into_value(), json!(["a", "1"]));
    assert_eq!(
        serde_json::to_string(&row(&["a", "1"])).unwrap(),
        r#"["a","1"]"#
    );
    assert_eq!(
        serde_json::to_string(&Record::Value(json!({"a": 1}))).unwrap(),
        r#"{"a":1}"#
    );
}

#[test]
fn rows_deserialize_positionally() {
    let (name, count): (String, String) = row(&["a", "1"]).deserialize_into().unwrap();
    assert_eq!(name, "a");
    assert_eq!(count, "1");
}

#[test]
fn source_kind_names_round_trip() {
    for kind in SourceKind::ALL {
        assert_eq!(SourceKind::from_str(&kind.to_string()), Some(kind));
    }
    assert_eq!(SourceKind::from_str("GZIP"), Some(SourceKind::CompressedFile));
    assert_eq!(SourceKind::from_str("parquet"), None);
}

#[test]
fn composite_and_path_backed_kinds() {
    assert!(SourceKind::Directory.is_composite());
    assert!(SourceKind::CompressedFile.is_composite());
    assert!(!SourceKind::JsonLinesFile.is_composite());
    assert!(SourceKind::CsvFile.is_path_backed());
    assert!(!SourceKind::CsvText.is_path_backed());
}
