//! Draft Records
//!
//! The in-progress object behind a creation form. Numeric fields are coerced
//! on every edit so the draft never holds text under a numeric key.

use serde_json::{Number, Value};
use thiserror::Error;

use crate::record::Record;
use crate::section::{FieldKind, FieldSpec};

/// Errors from editing a draft
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    /// Input for a numeric field was not a finite number
    #[error("'{input}' is not a number for field {key}")]
    NotANumber { key: String, input: String },
}

/// Draft record bound to a creation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftRecord {
    values: Record,
}

impl DraftRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one field edit.
    ///
    /// Text fields store the raw input. Numeric fields store a JSON number;
    /// blank input removes the key. Input that does not parse leaves the
    /// draft unchanged and returns an error.
    pub fn edit(&mut self, field: &FieldSpec, raw: &str) -> Result<(), DraftError> {
        match field.kind {
            FieldKind::Text => {
                self.values
                    .insert(field.key.to_string(), Value::String(raw.to_string()));
            }
            FieldKind::Number => match coerce_number(raw) {
                Some(Some(n)) => {
                    self.values.insert(field.key.to_string(), Value::Number(n));
                }
                Some(None) => {
                    self.values.remove(field.key);
                }
                None => {
                    return Err(DraftError::NotANumber {
                        key: field.key.to_string(),
                        input: raw.to_string(),
                    })
                }
            },
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Current input text for a field
    pub fn input_value(&self, key: &str) -> String {
        match self.values.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Request body with every configured field present.
    ///
    /// Unedited text fields are sent as `""`, unedited numeric fields as
    /// `null`.
    pub fn to_body(&self, fields: &[FieldSpec]) -> Record {
        fields
            .iter()
            .map(|field| {
                let value = self.values.get(field.key).cloned().unwrap_or(match field.kind {
                    FieldKind::Text => Value::String(String::new()),
                    FieldKind::Number => Value::Null,
                });
                (field.key.to_string(), value)
            })
            .collect()
    }
}

/// Parse numeric input. `Some(None)` means blank.
///
/// Integers stay integers so `96` is sent as `96`, not `96.0`.
fn coerce_number(raw: &str) -> Option<Option<Number>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(None);
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Some(Number::from(i)));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Some)
}
