//! Serialization round-trips for the payload types the presentation
//! boundary ships over the wire.

use pirep_model::{
    AlertCounts, BatchFindings, BatchOutcome, FieldStats, FieldValue, FindingKind, PirepEntry,
    PirepValue, RawRecord, SummaryReport, ValidationFinding,
};

#[test]
fn raw_record_serializes_as_plain_map() {
    let record = RawRecord::from_fields([
        ("temp_c", FieldValue::Number(100.0)),
        ("station", FieldValue::Text("KSEA".to_string())),
    ]);
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["temp_c"], 100.0);
    assert_eq!(json["station"], "KSEA");
}

#[test]
fn pirep_entry_marks_unknown_explicitly() {
    let mut entry = PirepEntry::new();
    entry.insert("temp_f", PirepValue::Unknown);
    entry.insert("pressure_kpa", PirepValue::Number(101.35));
    let json = serde_json::to_value(&entry).expect("serialize entry");
    assert_eq!(json["temp_f"], "unknown");
    assert_eq!(json["pressure_kpa"]["number"], 101.35);

    let round: PirepEntry = serde_json::from_value(json).expect("deserialize entry");
    assert_eq!(round, entry);
}

#[test]
fn finding_kind_uses_snake_case_on_the_wire() {
    let finding = ValidationFinding {
        field: "pressure_psi".to_string(),
        kind: FindingKind::OutOfRange,
        detail: "64 above maximum 50".to_string(),
    };
    let json = serde_json::to_value(&finding).expect("serialize finding");
    assert_eq!(json["kind"], "out_of_range");
}

#[test]
fn outcome_round_trips() {
    let mut findings = BatchFindings::new();
    findings.insert(
        1,
        vec![ValidationFinding {
            field: "temp_c".to_string(),
            kind: FindingKind::MissingValue,
            detail: "field not present".to_string(),
        }],
    );
    let mut summary = SummaryReport {
        record_count: 2,
        ..SummaryReport::default()
    };
    summary.fields.insert(
        "temp_f".to_string(),
        FieldStats {
            count: 1,
            skipped: 1,
            mean: Some(212.0),
            min: Some(212.0),
            max: Some(212.0),
        },
    );
    summary.alerts = AlertCounts {
        missing_value: 1,
        ..AlertCounts::default()
    };
    let outcome = BatchOutcome {
        pireps: vec![PirepEntry::new(), PirepEntry::new()],
        summary,
        findings,
    };

    let json = serde_json::to_string(&outcome).expect("serialize outcome");
    let round: BatchOutcome = serde_json::from_str(&json).expect("deserialize outcome");
    assert_eq!(round.finding_count(), 1);
    assert_eq!(round.findings_for(1).len(), 1);
    assert!(round.findings_for(0).is_empty());
    assert_eq!(round.summary.field("temp_f").unwrap().mean, Some(212.0));
}
