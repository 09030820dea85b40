//! Comma-delimited rows.
//!
//! Fields are split on every comma: there is no quoting and no escaping, so a
//! comma inside a field always starts a new field. An empty line is a row with
//! one empty field.

/// The only supported field delimiter.
pub const DELIMITER: char = ',';

/// Split one line of text into its fields, ignoring the line terminator.
pub fn split_row(text: &str) -> Vec<String> {
    text.trim_end_matches(['\n', '\r'])
        .split(DELIMITER)
        .map(str::to_owned)
        .collect()
}
