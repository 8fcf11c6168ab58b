//! Batch summarization.
//!
//! Skip policy: unknown-marked values never enter the aggregates and are
//! tallied per field in `skipped`. Out-of-range readings stay in — they are
//! real measurements, surfaced through the alert counts instead.

use pirep_model::{AlertCounts, BatchFindings, FieldStats, PirepEntry, Rounding, SummaryReport};

/// Compute per-field count/mean/min/max over a batch of entries plus the
/// anomaly tally from validation findings.
///
/// `numeric_fields` names the PIREP fields that participate (the catalog's
/// numeric targets). An empty batch yields zero counts and `None` stats for
/// every field.
pub fn summarize<'a, I>(
    numeric_fields: I,
    entries: &[PirepEntry],
    findings: &BatchFindings,
) -> SummaryReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = SummaryReport {
        record_count: entries.len(),
        ..SummaryReport::default()
    };

    for field in numeric_fields {
        report
            .fields
            .insert(field.to_string(), field_stats(field, entries));
    }

    report.alerts = AlertCounts::from_findings(findings.values().flatten());
    report
}

fn field_stats(field: &str, entries: &[PirepEntry]) -> FieldStats {
    let mut stats = FieldStats::default();
    let mut sum = 0.0;
    for entry in entries {
        match entry.known_number(field) {
            Some(value) => {
                stats.count += 1;
                sum += value;
                stats.min = Some(stats.min.map_or(value, |min: f64| min.min(value)));
                stats.max = Some(stats.max.map_or(value, |max: f64| max.max(value)));
            }
            None => stats.skipped += 1,
        }
    }
    if stats.count > 0 {
        stats.mean = Some(Rounding::TwoDecimal.apply(sum / stats.count as f64));
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pirep_model::PirepValue;

    fn entry(values: &[(&str, PirepValue)]) -> PirepEntry {
        let mut entry = PirepEntry::new();
        for (field, value) in values {
            entry.insert(field.to_string(), value.clone());
        }
        entry
    }

    #[test]
    fn empty_batch_has_no_data_markers() {
        let report = summarize(["temp_f", "pressure_kpa"], &[], &BatchFindings::new());
        assert_eq!(report.record_count, 0);
        assert_eq!(report.total_alerts(), 0);
        for field in ["temp_f", "pressure_kpa"] {
            let stats = report.field(field).expect("stats present");
            assert!(!stats.has_data());
            assert_eq!(stats.mean, None);
            assert_eq!(stats.min, None);
            assert_eq!(stats.max, None);
        }
    }

    #[test]
    fn unknown_values_are_skipped_and_counted() {
        let entries = vec![
            entry(&[("temp_f", PirepValue::Number(212.0))]),
            entry(&[("temp_f", PirepValue::Unknown)]),
            entry(&[("temp_f", PirepValue::Number(32.0))]),
        ];
        let report = summarize(["temp_f"], &entries, &BatchFindings::new());
        let stats = report.field("temp_f").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.mean, Some(122.0));
        assert_eq!(stats.min, Some(32.0));
        assert_eq!(stats.max, Some(212.0));
    }

    #[test]
    fn mean_is_two_decimal() {
        let entries = vec![
            entry(&[("rpm", PirepValue::Number(2400.0))]),
            entry(&[("rpm", PirepValue::Number(2401.0))]),
            entry(&[("rpm", PirepValue::Number(2401.0))]),
        ];
        let report = summarize(["rpm"], &entries, &BatchFindings::new());
        assert_eq!(report.field("rpm").unwrap().mean, Some(2400.67));
    }
}
