use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a data-quality issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    MissingValue,
    OutOfRange,
    MalformedType,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::MissingValue => "missing_value",
            FindingKind::OutOfRange => "out_of_range",
            FindingKind::MalformedType => "malformed_type",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded data-quality issue tied to a specific raw field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFinding {
    /// Raw field name the finding applies to.
    pub field: String,
    pub kind: FindingKind,
    /// Human-readable description: the observed value and the violated
    /// expectation.
    pub detail: String,
}

/// Findings per record, keyed by record index within the batch. Indices with
/// no findings are omitted.
pub type BatchFindings = BTreeMap<usize, Vec<ValidationFinding>>;

/// Batch-level anomaly tally, broken down by finding kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCounts {
    pub missing_value: u64,
    pub out_of_range: u64,
    pub malformed_type: u64,
}

impl AlertCounts {
    pub fn record(&mut self, kind: FindingKind) {
        match kind {
            FindingKind::MissingValue => self.missing_value += 1,
            FindingKind::OutOfRange => self.out_of_range += 1,
            FindingKind::MalformedType => self.malformed_type += 1,
        }
    }

    pub fn from_findings<'a, I>(findings: I) -> Self
    where
        I: IntoIterator<Item = &'a ValidationFinding>,
    {
        let mut counts = Self::default();
        for finding in findings {
            counts.record(finding.kind);
        }
        counts
    }

    pub fn total(&self) -> u64 {
        self.missing_value + self.out_of_range + self.malformed_type
    }
}
