//! CSV catalog loading.
//!
//! The catalog file carries one row per mapped field with the columns
//! `raw_name,target_name,kind,required,min,max,conversion,rounding,format`.
//! `min`/`max`, `conversion`, `rounding` and `format` may be left empty;
//! empty cells fall back to the same defaults the compiled-in catalog uses.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use pirep_model::{FieldCatalog, FieldKind, FieldSpec, Rounding, UnitConversion, ValueRange};

use crate::defaults::default_catalog;
use crate::error::CatalogError;

/// Environment variable pointing at a replacement catalog CSV.
pub const CATALOG_ENV_VAR: &str = "PIREP_FIELDS_FILE";

/// The catalog named by [`CATALOG_ENV_VAR`], or the compiled-in default.
pub fn catalog_from_env_or_default() -> Result<FieldCatalog, CatalogError> {
    match std::env::var(CATALOG_ENV_VAR) {
        Ok(path) => load_catalog(Path::new(&path)),
        Err(_) => Ok(default_catalog()),
    }
}

pub fn load_catalog(path: &Path) -> Result<FieldCatalog, CatalogError> {
    let rows = read_csv_rows(path)?;
    let mut specs: Vec<FieldSpec> = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        // Header is row 1 in the file.
        let file_row = idx + 2;
        let spec = parse_spec(path, file_row, row)?;
        if specs
            .iter()
            .any(|existing| existing.raw_name.eq_ignore_ascii_case(&spec.raw_name))
        {
            return Err(CatalogError::DuplicateField {
                path: path.to_path_buf(),
                name: spec.raw_name,
            });
        }
        specs.push(spec);
    }
    if specs.is_empty() {
        return Err(CatalogError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(FieldCatalog::new(specs))
}

fn read_csv_rows(path: &Path) -> Result<Vec<BTreeMap<String, String>>, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| csv_error(path, &source))?;
    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, &source))?
        .clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(path, &source))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers
                .get(idx)
                .unwrap_or("")
                .trim_matches('\u{feff}')
                .trim()
                .to_ascii_lowercase();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

fn csv_error(path: &Path, source: &csv::Error) -> CatalogError {
    if let csv::ErrorKind::Io(io) = source.kind() {
        return CatalogError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(io.kind(), io.to_string()),
        };
    }
    CatalogError::Csv {
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}

fn parse_spec(
    path: &Path,
    row_number: usize,
    row: &BTreeMap<String, String>,
) -> Result<FieldSpec, CatalogError> {
    let cell = |name: &str| row.get(name).map(String::as_str).unwrap_or("");
    let invalid = |message: String| CatalogError::InvalidRow {
        path: path.to_path_buf(),
        row: row_number,
        message,
    };

    let raw_name = cell("raw_name").to_string();
    if raw_name.is_empty() {
        return Err(invalid("raw_name is empty".to_string()));
    }
    let target_name = cell("target_name").to_string();
    if target_name.is_empty() {
        return Err(invalid("target_name is empty".to_string()));
    }
    let kind = cell("kind").parse::<FieldKind>().map_err(&invalid)?;
    let required = parse_flag(cell("required")).map_err(&invalid)?;
    let range = parse_range(cell("min"), cell("max")).map_err(&invalid)?;
    let conversion = cell("conversion")
        .parse::<UnitConversion>()
        .map_err(&invalid)?;
    let rounding = cell("rounding").parse::<Rounding>().map_err(&invalid)?;
    let format = match cell("format") {
        "" => None,
        value => Some(value.parse().map_err(&invalid)?),
    };

    if range.is_some() && kind != FieldKind::Numeric {
        return Err(invalid(format!(
            "{raw_name} is {kind} but declares a numeric range"
        )));
    }

    Ok(FieldSpec {
        raw_name,
        target_name,
        kind,
        required,
        range,
        conversion,
        rounding,
        format,
    })
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "no" | "false" | "0" => Ok(false),
        "yes" | "true" | "1" => Ok(true),
        other => Err(format!("unrecognized required flag: {other}")),
    }
}

fn parse_range(min: &str, max: &str) -> Result<Option<ValueRange>, String> {
    match (min.trim(), max.trim()) {
        ("", "") => Ok(None),
        ("", _) | (_, "") => Err("range needs both min and max".to_string()),
        (min, max) => {
            let min: f64 = min
                .parse()
                .map_err(|_| format!("invalid range min: {min}"))?;
            let max: f64 = max
                .parse()
                .map_err(|_| format!("invalid range max: {max}"))?;
            if min > max {
                return Err(format!("range min {min} exceeds max {max}"));
            }
            Ok(Some(ValueRange::new(min, max)))
        }
    }
}
