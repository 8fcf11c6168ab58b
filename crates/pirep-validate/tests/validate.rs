//! Validator behavior against the default engine-telemetry catalog.

use pirep_model::{FieldValue, FindingKind, RawRecord};
use pirep_standards::default_catalog;
use pirep_validate::Validator;

fn full_record() -> RawRecord {
    RawRecord::from_fields([
        ("station", FieldValue::Text("KSEA".to_string())),
        ("aircraft_type", FieldValue::Text("C172".to_string())),
        ("sample_time", FieldValue::Text("15:30".to_string())),
        ("temp_c", FieldValue::Number(100.0)),
        ("pressure_psi", FieldValue::Number(14.7)),
        ("rpm", FieldValue::Number(2400.0)),
        ("fuel_flow_gph", FieldValue::Number(9.5)),
        ("altitude_ft", FieldValue::Number(8500.0)),
        ("heading_deg", FieldValue::Number(270.0)),
    ])
}

#[test]
fn complete_in_range_record_is_clean() {
    let catalog = default_catalog();
    let validator = Validator::new(&catalog);
    assert!(validator.validate(&full_record()).is_empty());
}

fn without_field(record: &RawRecord, field: &str) -> RawRecord {
    RawRecord::from_fields(
        record
            .iter()
            .filter(|(name, _)| *name != field)
            .map(|(name, value)| (name.to_string(), value.clone())),
    )
}

#[test]
fn each_missing_required_field_yields_one_finding() {
    let catalog = default_catalog();
    let validator = Validator::new(&catalog);
    for field in ["station", "temp_c", "pressure_psi"] {
        let record = without_field(&full_record(), field);
        let findings = validator.validate(&record);
        assert_eq!(findings.len(), 1, "expected one finding for {field}");
        assert_eq!(findings[0].field, field);
        assert_eq!(findings[0].kind, FindingKind::MissingValue);
    }
}

#[test]
fn bad_station_code_is_malformed() {
    let catalog = default_catalog();
    let validator = Validator::new(&catalog);
    let mut record = full_record();
    record.insert("station", FieldValue::Text("SEATTLE".to_string()));
    let findings = validator.validate(&record);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::MalformedType);
    assert!(findings[0].detail.contains("ICAO"));
}

#[test]
fn unparseable_sample_time_is_malformed() {
    let catalog = default_catalog();
    let validator = Validator::new(&catalog);
    let mut record = full_record();
    record.insert("sample_time", FieldValue::Text("around noon".to_string()));
    let findings = validator.validate(&record);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].field, "sample_time");
    assert_eq!(findings[0].kind, FindingKind::MalformedType);
}

#[test]
fn validate_batch_is_independent_per_record() {
    let catalog = default_catalog();
    let validator = Validator::new(&catalog);
    let clean = full_record();
    let missing_temp = without_field(&clean, "temp_c");
    let mut overpressure = full_record();
    overpressure.insert("pressure_psi", FieldValue::Number(64.0));

    let batch = [clean, missing_temp, overpressure];
    let findings = validator.validate_batch(&batch);

    assert!(!findings.contains_key(&0));
    assert_eq!(findings[&1].len(), 1);
    assert_eq!(findings[&1][0].kind, FindingKind::MissingValue);
    assert_eq!(findings[&2].len(), 1);
    assert_eq!(findings[&2][0].kind, FindingKind::OutOfRange);
    assert!(findings[&2][0].detail.contains("64"));
    assert!(findings[&2][0].detail.contains("above maximum 50"));
}

#[test]
fn validation_does_not_mutate_input() {
    let catalog = default_catalog();
    let validator = Validator::new(&catalog);
    let record = full_record();
    let before = record.clone();
    let _ = validator.validate(&record);
    assert_eq!(record, before);
}
