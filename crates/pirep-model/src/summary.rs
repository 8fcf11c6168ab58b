use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::finding::AlertCounts;

/// Aggregate statistics for one numeric PIREP field across a batch.
///
/// `count` is the number of known values that entered the aggregates;
/// `skipped` is the number of unknown-marked values excluded from them.
/// The stats are `None` when no known value was seen ("no data"), never a
/// division-by-zero artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    pub count: u64,
    pub skipped: u64,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldStats {
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

/// Batch-level aggregate over the produced PIREP entries plus anomaly
/// counts from validation. Computed fresh per request; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub record_count: usize,
    /// Stats per numeric PIREP field, keyed by target field name.
    pub fields: BTreeMap<String, FieldStats>,
    pub alerts: AlertCounts,
}

impl SummaryReport {
    pub fn total_alerts(&self) -> u64 {
        self.alerts.total()
    }

    pub fn field(&self, name: &str) -> Option<&FieldStats> {
        self.fields.get(name)
    }
}
