//! Coded single-line PIREP rendering.
//!
//! Output follows the standard segment grammar: report type first, then
//! `/`-prefixed groups — `/OV` location, `/TM` time, `/FL` flight level,
//! `/TP` aircraft type, `/TA` temperature (Celsius, `M` prefix for
//! negatives). Segments whose value is unknown are omitted. Engine
//! readings have no standard group and ride in `/RM` remarks.

use pirep_model::{PirepEntry, UnitConversion};
use pirep_transform::{REPORT_TYPE_FIELD, ROUTINE_REPORT};

pub fn render_pirep_line(entry: &PirepEntry) -> String {
    let mut line = entry
        .known_text(REPORT_TYPE_FIELD)
        .unwrap_or(ROUTINE_REPORT)
        .to_string();

    if let Some(station) = entry.known_text("station") {
        push_segment(&mut line, "OV", station);
    }
    if let Some(time) = entry.known_text("time_utc") {
        push_segment(&mut line, "TM", time);
    }
    if let Some(level) = entry.known_number("flight_level") {
        let level = level.round() as i64;
        if (0..=999).contains(&level) {
            push_segment(&mut line, "FL", &format!("{level:03}"));
        }
    }
    if let Some(aircraft) = entry.known_text("aircraft_type") {
        push_segment(&mut line, "TP", &aircraft.to_ascii_uppercase());
    }
    if let Some(temp_f) = entry.known_number("temp_f") {
        let celsius = UnitConversion::CelsiusToFahrenheit.invert(temp_f).round() as i64;
        push_segment(&mut line, "TA", &encode_temperature(celsius));
    }
    if let Some(remarks) = render_remarks(entry) {
        push_segment(&mut line, "RM", &remarks);
    }

    line
}

fn push_segment(line: &mut String, code: &str, value: &str) {
    line.push_str(" /");
    line.push_str(code);
    line.push(' ');
    line.push_str(value);
}

/// Negative temperatures carry an `M` prefix, e.g. `M02` for -2 C.
fn encode_temperature(celsius: i64) -> String {
    if celsius < 0 {
        format!("M{:02}", -celsius)
    } else {
        format!("{celsius:02}")
    }
}

fn render_remarks(entry: &PirepEntry) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(kpa) = entry.known_number("pressure_kpa") {
        parts.push(format!("PRESS {}KPA", fmt_number(kpa)));
    }
    if let Some(rpm) = entry.known_number("rpm") {
        parts.push(format!("RPM {}", fmt_number(rpm)));
    }
    if let Some(flow) = entry.known_number("fuel_flow_lph") {
        parts.push(format!("FF {}LPH", fmt_number(flow)));
    }
    if let Some(heading) = entry.known_number("heading_deg") {
        parts.push(format!("HDG {}", fmt_number(heading)));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Format a number without trailing zeros: 2400.0 -> "2400", 101.35 stays.
fn fmt_number(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_encoding() {
        assert_eq!(encode_temperature(2), "02");
        assert_eq!(encode_temperature(-2), "M02");
        assert_eq!(encode_temperature(100), "100");
        assert_eq!(encode_temperature(-15), "M15");
        assert_eq!(encode_temperature(0), "00");
    }

    #[test]
    fn number_formatting_strips_trailing_zeros() {
        assert_eq!(fmt_number(2400.0), "2400");
        assert_eq!(fmt_number(101.35), "101.35");
        assert_eq!(fmt_number(35.5), "35.5");
    }
}
