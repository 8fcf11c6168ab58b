pub mod hash;
pub mod json;
pub mod pirep_line;

pub use hash::sha256_hex;
pub use json::{BatchReportPayload, write_report_json};
pub use pirep_line::render_pirep_line;
