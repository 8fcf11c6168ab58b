//! Data-quality validation over raw telemetry records.
//!
//! Rules are driven entirely by the [`FieldCatalog`] passed at
//! construction:
//!
//! - **required + absent/blank** → `MissingValue`
//! - **numeric field, unconvertible value** → `MalformedType`
//! - **numeric field, outside its valid range** → `OutOfRange`
//! - **text field failing its format rule** → `MalformedType`
//! - **timestamp field that does not parse** → `MalformedType`
//!
//! Findings are data, not control flow: validation never panics and never
//! aborts a batch, and the input record is never mutated.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, NaiveTime};

use pirep_model::{
    FieldCatalog, FieldKind, FieldSpec, FieldValue, FindingKind, RawRecord, ValidationFinding,
};

/// Validation context over a borrowed catalog.
pub struct Validator<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    /// Check one record against every expected field of the catalog.
    /// Always returns a (possibly empty) finding list.
    pub fn validate(&self, record: &RawRecord) -> Vec<ValidationFinding> {
        let mut findings = Vec::new();
        for spec in self.catalog.specs() {
            match record.get(&spec.raw_name) {
                None => {
                    if spec.required {
                        findings.push(ValidationFinding {
                            field: spec.raw_name.clone(),
                            kind: FindingKind::MissingValue,
                            detail: "field not present".to_string(),
                        });
                    }
                }
                Some(value) if value.is_blank() => {
                    if spec.required {
                        findings.push(ValidationFinding {
                            field: spec.raw_name.clone(),
                            kind: FindingKind::MissingValue,
                            detail: "value is blank".to_string(),
                        });
                    }
                }
                Some(value) => findings.extend(check_value(spec, value)),
            }
        }
        findings
    }

    /// Validate every record of a batch independently. Indices with no
    /// findings are omitted from the map.
    pub fn validate_batch(
        &self,
        records: &[RawRecord],
    ) -> BTreeMap<usize, Vec<ValidationFinding>> {
        let mut batch = BTreeMap::new();
        for (index, record) in records.iter().enumerate() {
            let findings = self.validate(record);
            if !findings.is_empty() {
                batch.insert(index, findings);
            }
        }
        batch
    }
}

fn check_value(spec: &FieldSpec, value: &FieldValue) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();
    match spec.kind {
        FieldKind::Numeric => match value.as_number() {
            Some(number) => {
                if let Some(range) = spec.range
                    && !range.contains(number)
                {
                    let bound = if number < range.min {
                        format!("below minimum {}", range.min)
                    } else {
                        format!("above maximum {}", range.max)
                    };
                    findings.push(ValidationFinding {
                        field: spec.raw_name.clone(),
                        kind: FindingKind::OutOfRange,
                        detail: format!("{number} {bound}"),
                    });
                }
            }
            None => findings.push(ValidationFinding {
                field: spec.raw_name.clone(),
                kind: FindingKind::MalformedType,
                detail: format!("{} is not numeric", display_value(value)),
            }),
        },
        FieldKind::Text => {
            if let Some(rule) = spec.format {
                let text = display_value(value);
                if !rule.matches(&text) {
                    findings.push(ValidationFinding {
                        field: spec.raw_name.clone(),
                        kind: FindingKind::MalformedType,
                        detail: format!("{text} is not {}", rule.describe()),
                    });
                }
            }
        }
        FieldKind::Timestamp => {
            let text = display_value(value);
            if !parses_as_sample_time(&text) {
                findings.push(ValidationFinding {
                    field: spec.raw_name.clone(),
                    kind: FindingKind::MalformedType,
                    detail: format!("{text} is not a recognizable time"),
                });
            }
        }
    }
    findings
}

fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(number) => number.to_string(),
        FieldValue::Text(text) => text.trim().to_string(),
    }
}

/// Accepted sample-time shapes: `HH:MM`, `HH:MM:SS`, `HHMM`/`HHMMZ`, and
/// ISO 8601 date-times. Must stay in step with the transformer's parser.
fn parses_as_sample_time(value: &str) -> bool {
    let trimmed = value.trim().trim_end_matches(['Z', 'z']);
    if NaiveTime::parse_from_str(trimmed, "%H:%M:%S").is_ok()
        || NaiveTime::parse_from_str(trimmed, "%H:%M").is_ok()
        || NaiveTime::parse_from_str(trimmed, "%H%M").is_ok()
    {
        return true;
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M").is_ok()
        || NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pirep_model::{Rounding, UnitConversion, ValueRange};

    fn numeric_spec(raw: &str, target: &str, range: Option<ValueRange>, required: bool) -> FieldSpec {
        FieldSpec {
            raw_name: raw.to_string(),
            target_name: target.to_string(),
            kind: FieldKind::Numeric,
            required,
            range,
            conversion: UnitConversion::None,
            rounding: Rounding::TwoDecimal,
            format: None,
        }
    }

    fn catalog() -> FieldCatalog {
        FieldCatalog::new(vec![
            numeric_spec("temp_c", "temp_f", Some(ValueRange::new(-60.0, 150.0)), true),
            numeric_spec("rpm", "rpm", Some(ValueRange::new(0.0, 8000.0)), false),
        ])
    }

    #[test]
    fn clean_record_has_no_findings() {
        let catalog = catalog();
        let record = RawRecord::from_fields([
            ("temp_c", FieldValue::Number(100.0)),
            ("rpm", FieldValue::Number(2400.0)),
        ]);
        assert!(Validator::new(&catalog).validate(&record).is_empty());
    }

    #[test]
    fn missing_required_field_is_reported_once() {
        let catalog = catalog();
        let record = RawRecord::from_fields([("rpm", FieldValue::Number(2400.0))]);
        let findings = Validator::new(&catalog).validate(&record);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, "temp_c");
        assert_eq!(findings[0].kind, FindingKind::MissingValue);
    }

    #[test]
    fn missing_optional_field_is_fine() {
        let catalog = catalog();
        let record = RawRecord::from_fields([("temp_c", FieldValue::Number(20.0))]);
        assert!(Validator::new(&catalog).validate(&record).is_empty());
    }

    #[test]
    fn out_of_range_detail_names_value_and_bound() {
        let catalog = catalog();
        let record = RawRecord::from_fields([
            ("temp_c", FieldValue::Number(999.0)),
            ("rpm", FieldValue::Number(-5.0)),
        ]);
        let findings = Validator::new(&catalog).validate(&record);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].kind, FindingKind::OutOfRange);
        assert!(findings[0].detail.contains("999"));
        assert!(findings[0].detail.contains("above maximum 150"));
        assert!(findings[1].detail.contains("below minimum 0"));
    }

    #[test]
    fn unconvertible_numeric_is_malformed() {
        let catalog = catalog();
        let record = RawRecord::from_fields([
            ("temp_c", FieldValue::Text("hot".to_string())),
            ("rpm", FieldValue::Text("2400".to_string())),
        ]);
        let findings = Validator::new(&catalog).validate(&record);
        // Quoted "2400" converts; "hot" does not.
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, "temp_c");
        assert_eq!(findings[0].kind, FindingKind::MalformedType);
    }

    #[test]
    fn sample_time_shapes() {
        assert!(parses_as_sample_time("15:30"));
        assert!(parses_as_sample_time("15:30:45"));
        assert!(parses_as_sample_time("1530"));
        assert!(parses_as_sample_time("1530Z"));
        assert!(parses_as_sample_time("2026-03-01T15:30"));
        assert!(parses_as_sample_time("2026-03-01 15:30:00"));
        assert!(!parses_as_sample_time("half past three"));
        assert!(!parses_as_sample_time("25:99"));
    }
}
