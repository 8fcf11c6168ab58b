pub mod finding;
pub mod mapping;
pub mod pirep;
pub mod processing;
pub mod record;
pub mod summary;

pub use finding::{AlertCounts, BatchFindings, FindingKind, ValidationFinding};
pub use mapping::{
    FieldCatalog, FieldKind, FieldSpec, FormatRule, Rounding, UnitConversion, ValueRange,
};
pub use pirep::{PirepEntry, PirepValue};
pub use processing::BatchOutcome;
pub use record::{FieldValue, RawRecord};
pub use summary::{FieldStats, SummaryReport};
