use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A standardized PIREP field value.
///
/// `Unknown` is the explicit marker used when the source field was missing
/// or flagged invalid; it is never silently replaced by a computed value and
/// is excluded from batch aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PirepValue {
    Number(f64),
    Text(String),
    Unknown,
}

impl PirepValue {
    pub fn is_unknown(&self) -> bool {
        matches!(self, PirepValue::Unknown)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PirepValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PirepValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// One Pilot Report entry, produced 1:1 from a raw record.
///
/// Every target field of the driving catalog is present in every entry,
/// with [`PirepValue::Unknown`] standing in for unusable sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PirepEntry {
    values: BTreeMap<String, PirepValue>,
}

impl PirepEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>>(&mut self, field: K, value: PirepValue) {
        self.values.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&PirepValue> {
        self.values.get(field)
    }

    /// The field's numeric value, unless absent or unknown.
    pub fn known_number(&self, field: &str) -> Option<f64> {
        self.values.get(field).and_then(PirepValue::as_number)
    }

    pub fn known_text(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(PirepValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PirepValue)> {
        self.values.iter().map(|(field, value)| (field.as_str(), value))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_are_not_numbers() {
        let mut entry = PirepEntry::new();
        entry.insert("temp_f", PirepValue::Unknown);
        entry.insert("pressure_kpa", PirepValue::Number(101.35));
        assert!(entry.get("temp_f").is_some_and(PirepValue::is_unknown));
        assert_eq!(entry.known_number("temp_f"), None);
        assert_eq!(entry.known_number("pressure_kpa"), Some(101.35));
    }
}
