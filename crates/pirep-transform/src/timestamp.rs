//! Sample-time standardization.
//!
//! PIREP time groups are UTC clock times in `HHMMZ` form. Uploads carry
//! whatever the recorder wrote: bare clock times, `HHMM` groups, or full
//! ISO 8601 date-times. The accepted shapes here must stay in step with the
//! validator's timestamp check.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Parse a raw sample-time value into a clock time. Returns `None` for
/// anything unrecognizable; the caller maps that to an unknown marker.
pub fn parse_sample_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim().trim_end_matches(['Z', 'z']);
    if trimmed.is_empty() {
        return None;
    }
    for format in ["%H:%M:%S", "%H:%M", "%H%M"] {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return Some(time);
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.time());
        }
    }
    None
}

/// Standard PIREP time group, e.g. `1530Z`.
pub fn format_hhmmz(time: NaiveTime) -> String {
    format!("{:02}{:02}Z", time.hour(), time.minute())
}
