//! Records
//!
//! Records are server-defined JSON objects. The client never validates their
//! shape; it only reads named keys when rendering cells.

use serde_json::{Map, Value};

/// One domain entity as returned by the backend
pub type Record = Map<String, Value>;

/// Text rendered for an absent or `null` value, in every table
pub const PLACEHOLDER: &str = "-";

/// How a column turns a record value into cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    /// Value rendered as-is
    Plain,
    /// Array rendered as its length
    Count,
}

/// Render one value for display.
///
/// Returns `None` for `null`; the caller substitutes [`PLACEHOLDER`].
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|v| display_value(v).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Render the cell for `key` in `record` according to `format`
pub fn cell_text(record: &Record, key: &str, format: CellFormat) -> String {
    let rendered = match (record.get(key), format) {
        (None, _) => None,
        (Some(value), CellFormat::Plain) => display_value(value),
        (Some(Value::Array(items)), CellFormat::Count) => Some(items.len().to_string()),
        (Some(value), CellFormat::Count) => display_value(value),
    };
    rendered.unwrap_or_else(|| PLACEHOLDER.to_string())
}
