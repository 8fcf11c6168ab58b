use serde::{Deserialize, Serialize};

use crate::finding::BatchFindings;
use crate::pirep::PirepEntry;
use crate::summary::SummaryReport;

/// The full result of processing one uploaded batch: the payload the
/// presentation boundary renders or returns as a response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub pireps: Vec<PirepEntry>,
    pub summary: SummaryReport,
    pub findings: BatchFindings,
}

impl BatchOutcome {
    pub fn finding_count(&self) -> usize {
        self.findings.values().map(Vec::len).sum()
    }

    pub fn has_findings(&self) -> bool {
        self.findings.values().any(|findings| !findings.is_empty())
    }

    /// Findings for one record, empty when the record was clean.
    pub fn findings_for(&self, index: usize) -> &[crate::ValidationFinding] {
        self.findings
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
