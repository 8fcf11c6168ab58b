//! Compiled-in engine-telemetry catalog.
//!
//! Raw field names follow the export headers of common engine monitors;
//! target names are the standardized PIREP fields the transformer emits.
//! Ranges are plausibility bounds for piston/light-turbine telemetry, not
//! operating limits: a value outside them is flagged, never discarded.

use pirep_model::{
    FieldCatalog, FieldKind, FieldSpec, FormatRule, Rounding, UnitConversion, ValueRange,
};

pub fn default_catalog() -> FieldCatalog {
    FieldCatalog::new(vec![
        FieldSpec {
            raw_name: "station".to_string(),
            target_name: "station".to_string(),
            kind: FieldKind::Text,
            required: true,
            range: None,
            conversion: UnitConversion::None,
            rounding: Rounding::TwoDecimal,
            format: Some(FormatRule::IcaoStation),
        },
        FieldSpec {
            raw_name: "aircraft_type".to_string(),
            target_name: "aircraft_type".to_string(),
            kind: FieldKind::Text,
            required: false,
            range: None,
            conversion: UnitConversion::None,
            rounding: Rounding::TwoDecimal,
            format: None,
        },
        FieldSpec {
            raw_name: "sample_time".to_string(),
            target_name: "time_utc".to_string(),
            kind: FieldKind::Timestamp,
            required: false,
            range: None,
            conversion: UnitConversion::None,
            rounding: Rounding::TwoDecimal,
            format: None,
        },
        FieldSpec {
            raw_name: "temp_c".to_string(),
            target_name: "temp_f".to_string(),
            kind: FieldKind::Numeric,
            required: true,
            range: Some(ValueRange::new(-60.0, 150.0)),
            conversion: UnitConversion::CelsiusToFahrenheit,
            rounding: Rounding::TwoDecimal,
            format: None,
        },
        FieldSpec {
            raw_name: "pressure_psi".to_string(),
            target_name: "pressure_kpa".to_string(),
            kind: FieldKind::Numeric,
            required: true,
            range: Some(ValueRange::new(0.0, 50.0)),
            conversion: UnitConversion::PsiToKilopascals,
            rounding: Rounding::TwoDecimal,
            format: None,
        },
        FieldSpec {
            raw_name: "rpm".to_string(),
            target_name: "rpm".to_string(),
            kind: FieldKind::Numeric,
            required: false,
            range: Some(ValueRange::new(0.0, 8000.0)),
            conversion: UnitConversion::None,
            rounding: Rounding::Integer,
            format: None,
        },
        FieldSpec {
            raw_name: "fuel_flow_gph".to_string(),
            target_name: "fuel_flow_lph".to_string(),
            kind: FieldKind::Numeric,
            required: false,
            range: Some(ValueRange::new(0.0, 60.0)),
            conversion: UnitConversion::GallonsToLitres,
            rounding: Rounding::TwoDecimal,
            format: None,
        },
        FieldSpec {
            raw_name: "altitude_ft".to_string(),
            target_name: "flight_level".to_string(),
            kind: FieldKind::Numeric,
            required: false,
            range: Some(ValueRange::new(-1000.0, 60000.0)),
            conversion: UnitConversion::FeetToFlightLevel,
            rounding: Rounding::Integer,
            format: None,
        },
        FieldSpec {
            raw_name: "heading_deg".to_string(),
            target_name: "heading_deg".to_string(),
            kind: FieldKind::Numeric,
            required: false,
            range: Some(ValueRange::new(0.0, 360.0)),
            conversion: UnitConversion::None,
            rounding: Rounding::Integer,
            format: None,
        },
    ])
}
