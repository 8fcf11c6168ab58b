//! Batch payload decoding.
//!
//! Two upload shapes are accepted:
//!
//! - delimited text: a header row naming raw fields, one data row per
//!   sample;
//! - keyed rows: one sample per line as comma-separated `field=value`
//!   pairs.
//!
//! Format detection looks at the first non-empty line: a `=` before any
//! comma means keyed rows. Empty cells are omitted from the decoded record
//! (the validator reports them as missing); numeric-looking cells decode
//! as numbers.

use std::path::Path;

use csv::ReaderBuilder;

use pirep_model::{FieldValue, RawRecord};

use crate::error::IngestError;

pub fn decode_batch_file(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let payload = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_batch(&payload)
}

pub fn decode_batch(payload: &str) -> Result<Vec<RawRecord>, IngestError> {
    let Some(first_line) = payload.lines().map(str::trim).find(|line| !line.is_empty()) else {
        return Err(IngestError::EmptyPayload);
    };
    if is_keyed_line(first_line) {
        decode_keyed_rows(payload)
    } else {
        decode_delimited(payload)
    }
}

fn is_keyed_line(line: &str) -> bool {
    match (line.find('='), line.find(',')) {
        (Some(eq), Some(comma)) => eq < comma,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn decode_keyed_rows(payload: &str) -> Result<Vec<RawRecord>, IngestError> {
    let mut records = Vec::new();
    for (idx, line) in payload.lines().enumerate() {
        let line = line.trim().trim_matches('\u{feff}');
        if line.is_empty() {
            continue;
        }
        let mut record = RawRecord::new();
        for pair in line.split(',') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let Some((name, value)) = pair.split_once('=') else {
                return Err(IngestError::Malformed {
                    line: idx + 1,
                    message: format!("expected field=value, found {pair}"),
                });
            };
            let name = normalize_header(name);
            if name.is_empty() {
                return Err(IngestError::Malformed {
                    line: idx + 1,
                    message: "empty field name".to_string(),
                });
            }
            let value = normalize_cell(value);
            if value.is_empty() {
                continue;
            }
            record.insert(name, classify_value(&value));
        }
        if !record.is_empty() {
            records.push(record);
        }
    }
    if records.is_empty() {
        return Err(IngestError::EmptyPayload);
    }
    Ok(records)
}

fn decode_delimited(payload: &str) -> Result<Vec<RawRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(payload.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            message: source.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    let mut rows = raw_rows.into_iter();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyPayload);
    };
    let headers: Vec<String> = header_row.iter().map(|cell| normalize_header(cell)).collect();

    let mut records = Vec::new();
    for row in rows {
        let mut record = RawRecord::new();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(idx).map(String::as_str).unwrap_or("");
            if value.is_empty() {
                continue;
            }
            record.insert(header.clone(), classify_value(value));
        }
        records.push(record);
    }
    if records.is_empty() {
        return Err(IngestError::EmptyPayload);
    }
    Ok(records)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn classify_value(raw: &str) -> FieldValue {
    match raw.parse::<f64>() {
        Ok(number) => FieldValue::Number(number),
        Err(_) => FieldValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_delimited_payload() {
        let payload = "temp_c,pressure_psi,station\n100,14.7,KSEA\n98.5,14.2,KPDX\n";
        let records = decode_batch(payload).expect("decode");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("temp_c"),
            Some(&FieldValue::Number(100.0))
        );
        assert_eq!(
            records[1].get("station"),
            Some(&FieldValue::Text("KPDX".to_string()))
        );
    }

    #[test]
    fn decodes_keyed_rows() {
        let payload = "temp_c=100, pressure_psi=14.7, station=KSEA\ntemp_c=95, pressure_psi=14.1\n";
        let records = decode_batch(payload).expect("decode");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("pressure_psi"),
            Some(&FieldValue::Number(14.7))
        );
        assert!(records[1].get("station").is_none());
    }

    #[test]
    fn empty_cells_are_omitted() {
        let payload = "temp_c,pressure_psi\n,14.7\n";
        let records = decode_batch(payload).expect("decode");
        assert_eq!(records.len(), 1);
        assert!(records[0].get("temp_c").is_none());
        assert!(records[0].contains("pressure_psi"));
    }

    #[test]
    fn empty_payload_is_structural() {
        assert!(matches!(
            decode_batch("   \n\n"),
            Err(IngestError::EmptyPayload)
        ));
    }

    #[test]
    fn header_only_payload_is_structural() {
        assert!(matches!(
            decode_batch("temp_c,pressure_psi\n"),
            Err(IngestError::EmptyPayload)
        ));
    }

    #[test]
    fn malformed_keyed_pair_is_structural() {
        let result = decode_batch("temp_c=100, pressure\n");
        assert!(matches!(
            result,
            Err(IngestError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn bom_is_stripped_from_headers() {
        let payload = "\u{feff}temp_c,pressure_psi\n100,14.7\n";
        let records = decode_batch(payload).expect("decode");
        assert!(records[0].contains("temp_c"));
    }
}
