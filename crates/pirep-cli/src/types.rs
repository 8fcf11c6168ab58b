use std::path::PathBuf;

use pirep_model::BatchOutcome;

#[derive(Debug)]
pub struct ProcessResult {
    pub batch: String,
    pub output_dir: PathBuf,
    pub outcome: BatchOutcome,
    pub report_json: Option<PathBuf>,
    pub pirep_lines: Option<PathBuf>,
}
