//! Raw record to PIREP entry mapping.

use std::collections::BTreeSet;

use pirep_model::{
    FieldCatalog, FieldKind, FieldSpec, FieldValue, FindingKind, FormatRule, PirepEntry,
    PirepValue, RawRecord, ValidationFinding,
};

use crate::timestamp::{format_hhmmz, parse_sample_time};

/// Derived PIREP field carrying the report urgency.
pub const REPORT_TYPE_FIELD: &str = "report_type";
/// Routine report type code.
pub const ROUTINE_REPORT: &str = "UA";
/// Urgent report type code, emitted when a record carries out-of-range
/// readings.
pub const URGENT_REPORT: &str = "UUA";

/// Transformation context over a borrowed catalog.
///
/// `to_pirep` is a deterministic pure function: identical (record,
/// findings) inputs always produce an identical entry, and the wall clock
/// is never consulted.
pub struct Transformer<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> Transformer<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FieldCatalog {
        self.catalog
    }

    /// Map one raw record to its PIREP entry.
    ///
    /// Every target field of the catalog appears in the output. A source
    /// flagged `MissingValue` or `MalformedType` maps to
    /// [`PirepValue::Unknown`] rather than being computed from garbage; an
    /// `OutOfRange` source is converted normally and surfaced through the
    /// findings instead.
    pub fn to_pirep(&self, record: &RawRecord, findings: &[ValidationFinding]) -> PirepEntry {
        let blocked = blocked_fields(findings);
        let mut entry = PirepEntry::new();
        for spec in self.catalog.specs() {
            let value = if blocked.contains(spec.raw_name.to_ascii_lowercase().as_str()) {
                PirepValue::Unknown
            } else {
                convert_field(spec, record)
            };
            entry.insert(spec.target_name.clone(), value);
        }
        entry.insert(REPORT_TYPE_FIELD, derive_report_type(findings));
        entry
    }
}

/// Raw fields whose findings force the unknown fallback.
fn blocked_fields(findings: &[ValidationFinding]) -> BTreeSet<String> {
    findings
        .iter()
        .filter(|finding| {
            matches!(
                finding.kind,
                FindingKind::MissingValue | FindingKind::MalformedType
            )
        })
        .map(|finding| finding.field.to_ascii_lowercase())
        .collect()
}

fn convert_field(spec: &FieldSpec, record: &RawRecord) -> PirepValue {
    let Some(value) = record.get_present(&spec.raw_name) else {
        return PirepValue::Unknown;
    };
    match spec.kind {
        FieldKind::Numeric => match value.as_number() {
            Some(number) => {
                let converted = spec.conversion.apply(number);
                PirepValue::Number(spec.rounding.apply(converted))
            }
            None => PirepValue::Unknown,
        },
        FieldKind::Text => match text_of(value) {
            Some(text) => {
                // Station identifiers are coded uppercase in PIREP output.
                if spec.format == Some(FormatRule::IcaoStation) {
                    PirepValue::Text(text.to_ascii_uppercase())
                } else {
                    PirepValue::Text(text)
                }
            }
            None => PirepValue::Unknown,
        },
        FieldKind::Timestamp => match text_of(value).as_deref().and_then(parse_sample_time) {
            Some(time) => PirepValue::Text(format_hhmmz(time)),
            None => PirepValue::Unknown,
        },
    }
}

fn text_of(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        FieldValue::Number(number) => Some(number.to_string()),
    }
}

fn derive_report_type(findings: &[ValidationFinding]) -> PirepValue {
    let urgent = findings
        .iter()
        .any(|finding| finding.kind == FindingKind::OutOfRange);
    PirepValue::Text(if urgent { URGENT_REPORT } else { ROUTINE_REPORT }.to_string())
}
