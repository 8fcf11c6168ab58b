use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single raw telemetry value as decoded from an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value. Text that parses as a number counts:
    /// uploads routinely quote numeric columns.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            FieldValue::Number(_) => None,
        }
    }

    /// True for empty or whitespace-only text. A blank cell is treated the
    /// same as an absent field.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(_) => false,
        }
    }
}

/// One unprocessed telemetry sample keyed by field name.
///
/// Field names are matched ASCII-case-insensitively; keys are normalized to
/// lowercase on insertion. The record is immutable once received: consumers
/// get read accessors only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: Into<String>,
    {
        let mut record = Self::new();
        for (name, value) in fields {
            record.insert(name, value);
        }
        record
    }

    /// Insert a field during construction. Later inserts with the same
    /// (case-insensitive) name overwrite earlier ones.
    pub fn insert<K: Into<String>>(&mut self, name: K, value: FieldValue) {
        self.fields
            .insert(name.into().to_ascii_lowercase(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(&name.to_ascii_lowercase())
    }

    /// The field value, unless absent or blank.
    pub fn get_present(&self, name: &str) -> Option<&FieldValue> {
        self.get(name).filter(|value| !value.is_blank())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(&name.to_ascii_lowercase())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
