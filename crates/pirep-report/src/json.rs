use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use pirep_model::BatchOutcome;

const REPORT_SCHEMA: &str = "pirep-studio.batch-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Envelope written around a processed batch: schema tag, generation
/// timestamp, and a digest of the raw payload the outcome was derived
/// from, so a report can be tied back to its exact upload.
#[derive(Debug, Serialize)]
pub struct BatchReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub batch: String,
    pub payload_sha256: String,
    pub record_count: usize,
    pub alert_count: u64,
    pub outcome: BatchOutcome,
}

impl BatchReportPayload {
    pub fn new(batch: &str, outcome: &BatchOutcome, payload_sha256: &str) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            batch: batch.to_string(),
            payload_sha256: payload_sha256.to_string(),
            record_count: outcome.pireps.len(),
            alert_count: outcome.summary.total_alerts(),
            outcome: outcome.clone(),
        }
    }
}

pub fn write_report_json(
    output_dir: &Path,
    batch: &str,
    outcome: &BatchOutcome,
    payload_sha256: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("batch_report.json");
    let payload = BatchReportPayload::new(batch, outcome, payload_sha256);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
