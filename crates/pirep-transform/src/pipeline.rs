//! The per-upload processing pipeline: validate, transform, summarize.

use tracing::{debug, info};

use pirep_model::{BatchOutcome, FieldCatalog, RawRecord};
use pirep_validate::Validator;

use crate::summary::summarize;
use crate::transformer::Transformer;

/// Run the full pipeline over one decoded batch.
///
/// Pure and idempotent: the same catalog and records always produce the
/// same outcome. Per-field anomalies never abort the batch; the outcome
/// always covers every input record.
pub fn process_batch(catalog: &FieldCatalog, records: &[RawRecord]) -> BatchOutcome {
    let validator = Validator::new(catalog);
    let transformer = Transformer::new(catalog);

    let findings = validator.validate_batch(records);
    debug!(
        records = records.len(),
        flagged_records = findings.len(),
        "validation complete"
    );

    let empty = Vec::new();
    let pireps: Vec<_> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let record_findings = findings.get(&index).unwrap_or(&empty);
            transformer.to_pirep(record, record_findings)
        })
        .collect();

    let summary = summarize(catalog.numeric_targets(), &pireps, &findings);
    info!(
        records = records.len(),
        findings = summary.total_alerts(),
        "batch processed"
    );

    BatchOutcome {
        pireps,
        summary,
        findings,
    }
}
