//! End-to-end pipeline scenarios against the default catalog.

use pirep_model::{FieldValue, PirepValue, RawRecord};
use pirep_standards::default_catalog;
use pirep_transform::{REPORT_TYPE_FIELD, process_batch};

fn record(fields: &[(&str, FieldValue)]) -> RawRecord {
    RawRecord::from_fields(
        fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone())),
    )
}

fn base_record() -> RawRecord {
    record(&[
        ("station", FieldValue::Text("KSEA".to_string())),
        ("temp_c", FieldValue::Number(100.0)),
        ("pressure_psi", FieldValue::Number(14.7)),
    ])
}

#[test]
fn known_conversion_scenario() {
    let catalog = default_catalog();
    let outcome = process_batch(&catalog, &[base_record()]);

    let entry = &outcome.pireps[0];
    let temp_f = entry.known_number("temp_f").expect("temp_f");
    assert!((temp_f - 212.0).abs() < 0.1, "temp_f was {temp_f}");
    let kpa = entry.known_number("pressure_kpa").expect("pressure_kpa");
    assert!((kpa - 101.35).abs() < 0.1, "pressure_kpa was {kpa}");
    assert!(outcome.findings.is_empty());
}

#[test]
fn missing_temp_scenario() {
    let catalog = default_catalog();
    let mut fields = base_record();
    fields = RawRecord::from_fields(
        fields
            .iter()
            .filter(|(name, _)| *name != "temp_c")
            .map(|(name, value)| (name.to_string(), value.clone())),
    );
    let outcome = process_batch(&catalog, &[fields]);

    let findings = outcome.findings_for(0);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].field, "temp_c");

    let entry = &outcome.pireps[0];
    assert!(entry.get("temp_f").is_some_and(PirepValue::is_unknown));

    let stats = outcome.summary.field("temp_f").expect("temp_f stats");
    assert_eq!(stats.count, 0);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.mean, None);
}

#[test]
fn out_of_range_pressure_scenario() {
    let catalog = default_catalog();
    let mut overpressure = base_record();
    overpressure.insert("pressure_psi", FieldValue::Number(64.0));
    let batch = [base_record(), base_record(), overpressure];

    let outcome = process_batch(&catalog, &batch);

    assert_eq!(outcome.summary.alerts.out_of_range, 1);
    assert_eq!(outcome.summary.total_alerts(), 1);

    // Out-of-range readings stay in the aggregates: the mean covers all 3.
    let stats = outcome.summary.field("pressure_kpa").expect("stats");
    assert_eq!(stats.count, 3);
    assert_eq!(stats.skipped, 0);
    let expected_mean = (101.35 + 101.35 + 441.26) / 3.0;
    let mean = stats.mean.expect("mean");
    assert!((mean - expected_mean).abs() < 0.05, "mean was {mean}");

    // The flagged record is urgent; the clean ones are routine.
    assert_eq!(outcome.pireps[0].known_text(REPORT_TYPE_FIELD), Some("UA"));
    assert_eq!(outcome.pireps[2].known_text(REPORT_TYPE_FIELD), Some("UUA"));
}

#[test]
fn every_entry_carries_all_catalog_targets() {
    let catalog = default_catalog();
    let outcome = process_batch(&catalog, &[base_record()]);
    let entry = &outcome.pireps[0];
    for spec in catalog.specs() {
        assert!(
            entry.get(&spec.target_name).is_some(),
            "missing target {}",
            spec.target_name
        );
    }
    assert!(entry.get(REPORT_TYPE_FIELD).is_some());
}

#[test]
fn optional_absent_fields_map_to_unknown_without_findings() {
    let catalog = default_catalog();
    let outcome = process_batch(&catalog, &[base_record()]);
    let entry = &outcome.pireps[0];
    // No rpm in the upload: no finding, but the target is present as unknown.
    assert!(outcome.findings.is_empty());
    assert!(entry.get("rpm").is_some_and(PirepValue::is_unknown));
    assert!(entry.get("time_utc").is_some_and(PirepValue::is_unknown));
}

#[test]
fn timestamp_standardizes_to_hhmmz() {
    let catalog = default_catalog();
    let mut sample = base_record();
    sample.insert("sample_time", FieldValue::Text("2026-03-01T15:30:00".to_string()));
    let outcome = process_batch(&catalog, &[sample]);
    assert_eq!(outcome.pireps[0].known_text("time_utc"), Some("1530Z"));
}

#[test]
fn pipeline_is_idempotent() {
    let catalog = default_catalog();
    let batch = [base_record()];
    let first = process_batch(&catalog, &batch);
    let second = process_batch(&catalog, &batch);
    assert_eq!(first.pireps, second.pireps);
    assert_eq!(first.summary, second.summary);
}
