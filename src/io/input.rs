//! The opaque input value handed to the loader.

use std::fmt;

use serde_json::{Map, Value};

use crate::format::Record;

/// Boxed record iterator accepted as a generic-iterable input.
pub type RecordIter = Box<dyn Iterator<Item = Record> + Send>;

/// An input whose source kind has not been decided yet.
///
/// A `Text` input may be JSON, a single CSV row, or the path of a file or
/// directory; the classifier decides which.
pub enum Input {
    /// An already-parsed key-value mapping
    Mapping(Map<String, Value>),
    /// Any sequence of records, pulled lazily
    Iterable(RecordIter),
    /// A string: JSON text, CSV text, or a filesystem path
    Text(String),
}

impl Input {
    /// Wrap any iterator of record-like items as an iterable input.
    pub fn iter<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
        T: Into<Record> + 'static,
    {
        Input::Iterable(Box::new(items.into_iter().map(<T as Into<Record>>::into)))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Short name of the input's shape, used in errors.
    pub fn shape(&self) -> &'static str {
        match self {
            Input::Mapping(_) => "mapping",
            Input::Iterable(_) => "iterable",
            Input::Text(_) => "text",
        }
    }

    /// Identifier used for logging and error targets.
    pub fn id(&self) -> String {
        match self {
            Input::Text(text) => text.clone(),
            other => format!("<{}>", other.shape()),
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Mapping(map) => f.debug_tuple("Mapping").field(map).finish(),
            Input::Iterable(_) => f.write_str("Iterable(..)"),
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl From<Map<String, Value>> for Input {
    fn from(map: Map<String, Value>) -> Self {
        Input::Mapping(map)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_owned())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Vec<Record>> for Input {
    fn from(records: Vec<Record>) -> Self {
        Input::Iterable(Box::new(records.into_iter()))
    }
}

impl From<Vec<Value>> for Input {
    fn from(values: Vec<Value>) -> Self {
        Input::iter(values)
    }
}

impl From<RecordIter> for Input {
    fn from(iter: RecordIter) -> Self {
        Input::Iterable(iter)
    }
}

/// Objects become mappings and arrays become iterables. Strings are text;
/// any other scalar is treated as the text of its JSON rendering.
impl From<Value> for Input {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Input::Mapping(map),
            Value::Array(items) => Input::iter(items),
            Value::String(text) => Input::Text(text),
            other => Input::Text(other.to_string()),
        }
    }
}
