use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Expected type of a raw telemetry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Numeric measurement (a quoted number satisfies this).
    Numeric,
    /// Free-form or coded text.
    Text,
    /// Clock or date-time value, standardized to HHMMZ on output.
    Timestamp,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Numeric => "numeric",
            FieldKind::Text => "text",
            FieldKind::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "num" => Ok(FieldKind::Numeric),
            "text" | "char" => Ok(FieldKind::Text),
            "timestamp" | "time" => Ok(FieldKind::Timestamp),
            other => Err(format!("Unknown field kind: {other}")),
        }
    }
}

/// Unit conversion applied when mapping a raw value to its PIREP field.
///
/// Conversions are deterministic pure functions; `invert` is defined for
/// every conversion so round-trip checks can recover the raw value within
/// rounding tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitConversion {
    /// No conversion; the raw number is carried through.
    #[default]
    None,
    CelsiusToFahrenheit,
    PsiToKilopascals,
    GallonsToLitres,
    /// Feet to flight level (hundreds of feet).
    FeetToFlightLevel,
}

/// Kilopascals per pound-force per square inch.
const KPA_PER_PSI: f64 = 6.894757;
/// Litres per US gallon.
const LITRES_PER_GALLON: f64 = 3.785412;

impl UnitConversion {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            UnitConversion::None => value,
            UnitConversion::CelsiusToFahrenheit => value * 9.0 / 5.0 + 32.0,
            UnitConversion::PsiToKilopascals => value * KPA_PER_PSI,
            UnitConversion::GallonsToLitres => value * LITRES_PER_GALLON,
            UnitConversion::FeetToFlightLevel => value / 100.0,
        }
    }

    pub fn invert(&self, value: f64) -> f64 {
        match self {
            UnitConversion::None => value,
            UnitConversion::CelsiusToFahrenheit => (value - 32.0) * 5.0 / 9.0,
            UnitConversion::PsiToKilopascals => value / KPA_PER_PSI,
            UnitConversion::GallonsToLitres => value / LITRES_PER_GALLON,
            UnitConversion::FeetToFlightLevel => value * 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitConversion::None => "none",
            UnitConversion::CelsiusToFahrenheit => "celsius_to_fahrenheit",
            UnitConversion::PsiToKilopascals => "psi_to_kilopascals",
            UnitConversion::GallonsToLitres => "gallons_to_litres",
            UnitConversion::FeetToFlightLevel => "feet_to_flight_level",
        }
    }
}

impl fmt::Display for UnitConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitConversion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(UnitConversion::None),
            "celsius_to_fahrenheit" | "c_to_f" => Ok(UnitConversion::CelsiusToFahrenheit),
            "psi_to_kilopascals" | "psi_to_kpa" => Ok(UnitConversion::PsiToKilopascals),
            "gallons_to_litres" | "gph_to_lph" => Ok(UnitConversion::GallonsToLitres),
            "feet_to_flight_level" | "ft_to_fl" => Ok(UnitConversion::FeetToFlightLevel),
            other => Err(format!("Unknown unit conversion: {other}")),
        }
    }
}

/// Rounding policy for a converted numeric field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Nearest integer, for display fields (rpm, flight level, heading).
    Integer,
    /// Two-decimal precision, for derived metrics.
    #[default]
    TwoDecimal,
}

impl Rounding {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rounding::Integer => value.round(),
            Rounding::TwoDecimal => (value * 100.0).round() / 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rounding::Integer => "integer",
            Rounding::TwoDecimal => "two_decimal",
        }
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(Rounding::Integer),
            "" | "two_decimal" | "2dp" => Ok(Rounding::TwoDecimal),
            other => Err(format!("Unknown rounding policy: {other}")),
        }
    }
}

/// Additional format rule for a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatRule {
    /// Four ASCII letters, e.g. `KSEA`, `VABB`.
    IcaoStation,
}

impl FormatRule {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FormatRule::IcaoStation => {
                let trimmed = value.trim();
                trimmed.len() == 4 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic())
            }
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            FormatRule::IcaoStation => "a 4-letter ICAO station identifier",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatRule::IcaoStation => "icao_station",
        }
    }
}

impl FromStr for FormatRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "icao_station" | "icao" => Ok(FormatRule::IcaoStation),
            other => Err(format!("Unknown format rule: {other}")),
        }
    }
}

/// Inclusive valid range for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One entry of the field-mapping table: a raw telemetry field, its
/// standardized PIREP target, and the checks and conversion between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Raw field name as it appears in uploads.
    pub raw_name: String,
    /// Standardized PIREP field name.
    pub target_name: String,
    pub kind: FieldKind,
    /// Required fields produce a MissingValue finding when absent.
    pub required: bool,
    #[serde(default)]
    pub range: Option<ValueRange>,
    #[serde(default)]
    pub conversion: UnitConversion,
    #[serde(default)]
    pub rounding: Rounding,
    #[serde(default)]
    pub format: Option<FormatRule>,
}

/// The static field-mapping and validation-range configuration driving both
/// Validator and Transformer. Built once per process and passed by
/// reference; never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldCatalog {
    specs: Vec<FieldSpec>,
}

impl FieldCatalog {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn by_raw_name(&self, name: &str) -> Option<&FieldSpec> {
        self.specs
            .iter()
            .find(|spec| spec.raw_name.eq_ignore_ascii_case(name))
    }

    pub fn by_target_name(&self, name: &str) -> Option<&FieldSpec> {
        self.specs
            .iter()
            .find(|spec| spec.target_name.eq_ignore_ascii_case(name))
    }

    /// Target names of numeric fields, in catalog order. These are the
    /// fields that participate in summary statistics.
    pub fn numeric_targets(&self) -> impl Iterator<Item = &str> {
        self.specs
            .iter()
            .filter(|spec| spec.kind == FieldKind::Numeric)
            .map(|spec| spec.target_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
