//! Source kinds, records and the sniffing that maps one to the other.
//!
//! This module provides:
//! - `SourceKind`: The closed set of source kinds an input can be classified as
//! - `Record`: The unit yielded by every producer
//! - `probe`: Fallible yes/no tests used while sniffing
//! - `sniff`: The classifier turning an `Input` into a `SourceKind`

pub mod csv;
pub mod json;
pub mod probe;
pub mod sniff;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The kind of data source an input represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// An in-memory key-value mapping
    Mapping,
    /// Any other in-memory sequence of records
    GenericIterable,
    /// A string holding one JSON document
    JsonText,
    /// A file holding one JSON document per line
    JsonLinesFile,
    /// A string holding one comma-delimited row
    CsvText,
    /// A file holding comma-delimited rows
    CsvFile,
    /// A gzip file whose lines are JSON or CSV
    CompressedFile,
    /// A directory whose entries are loaded recursively
    Directory,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Mapping => write!(f, "mapping"),
            SourceKind::GenericIterable => write!(f, "iterable"),
            SourceKind::JsonText => write!(f, "json"),
            SourceKind::JsonLinesFile => write!(f, "json-lines-file"),
            SourceKind::CsvText => write!(f, "csv"),
            SourceKind::CsvFile => write!(f, "csv-file"),
            SourceKind::CompressedFile => write!(f, "compressed-file"),
            SourceKind::Directory => write!(f, "directory"),
        }
    }
}

impl SourceKind {
    /// Every kind, in classifier priority order.
    pub const ALL: [SourceKind; 8] = [
        SourceKind::Mapping,
        SourceKind::JsonText,
        SourceKind::CompressedFile,
        SourceKind::JsonLinesFile,
        SourceKind::CsvFile,
        SourceKind::Directory,
        SourceKind::GenericIterable,
        SourceKind::CsvText,
    ];

    /// Parse a source kind from its display name (plus a few aliases).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mapping" | "map" | "dict" => Some(SourceKind::Mapping),
            "iterable" | "iter" => Some(SourceKind::GenericIterable),
            "json" => Some(SourceKind::JsonText),
            "json-lines-file" | "jsonl" | "ndjson" => Some(SourceKind::JsonLinesFile),
            "csv" => Some(SourceKind::CsvText),
            "csv-file" => Some(SourceKind::CsvFile),
            "compressed-file" | "gz" | "gzip" => Some(SourceKind::CompressedFile),
            "directory" | "dir" => Some(SourceKind::Directory),
            _ => None,
        }
    }

    /// Kinds that re-enter the classifier for their nested items.
    pub fn is_composite(&self) -> bool {
        matches!(self, SourceKind::CompressedFile | SourceKind::Directory)
    }

    /// Kinds whose input string is a filesystem path.
    pub fn is_path_backed(&self) -> bool {
        matches!(
            self,
            SourceKind::JsonLinesFile
                | SourceKind::CsvFile
                | SourceKind::CompressedFile
                | SourceKind::Directory
        )
    }
}

/// One unit of output from a producer.
///
/// Mapping and JSON sources yield `Value`s, CSV sources yield `Row`s.
/// Records of a generic iterable are passed through as given.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Value(Value),
    Row(Vec<String>),
}

impl Record {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Record::Value(v) => Some(v),
            Record::Row(_) => None,
        }
    }

    pub fn as_row(&self) -> Option<&[String]> {
        match self {
            Record::Row(fields) => Some(fields),
            Record::Value(_) => None,
        }
    }

    /// Convert into a JSON value; rows become arrays of strings.
    pub fn into_value(self) -> Value {
        match self {
            Record::Value(v) => v,
            Record::Row(fields) => Value::Array(fields.into_iter().map(Value::String).collect()),
        }
    }

    /// Decode this record into `T` through its JSON representation.
    ///
    /// Rows decode positionally, so tuples, arrays and `Vec<String>` all work.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.into_value())
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Record::Value(value)
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Record::Row(fields)
    }
}

impl From<serde_json::Map<String, Value>> for Record {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Record::Value(Value::Object(map))
    }
}
