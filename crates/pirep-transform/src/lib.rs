pub mod pipeline;
pub mod summary;
pub mod timestamp;
pub mod transformer;

pub use pipeline::process_batch;
pub use summary::summarize;
pub use timestamp::{format_hhmmz, parse_sample_time};
pub use transformer::{REPORT_TYPE_FIELD, ROUTINE_REPORT, Transformer, URGENT_REPORT};
