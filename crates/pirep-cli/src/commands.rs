use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use pirep_ingest::decode_batch;
use pirep_report::{render_pirep_line, sha256_hex, write_report_json};
use pirep_standards::catalog_from_env_or_default;
use pirep_transform::process_batch;

use crate::cli::{OutputFormatArg, ProcessArgs};
use crate::summary::apply_table_style;
use crate::types::ProcessResult;

pub fn run_fields() -> Result<()> {
    let catalog = catalog_from_env_or_default().context("load field catalog")?;
    let mut table = Table::new();
    table.set_header(vec![
        "Raw Field",
        "PIREP Field",
        "Kind",
        "Required",
        "Range",
        "Conversion",
        "Rounding",
    ]);
    apply_table_style(&mut table);
    for spec in catalog.specs() {
        let range = spec
            .range
            .map(|range| format!("{}..{}", range.min, range.max))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            spec.raw_name.clone(),
            spec.target_name.clone(),
            spec.kind.to_string(),
            if spec.required { "yes" } else { "no" }.to_string(),
            range,
            spec.conversion.to_string(),
            spec.rounding.as_str().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let batch = derive_batch_label(args);
    let process_span = info_span!("process", batch = %batch);
    let _process_guard = process_span.enter();

    let payload = std::fs::read_to_string(&args.input)
        .with_context(|| format!("read batch file: {}", args.input.display()))?;
    let records = decode_batch(&payload).context("decode batch")?;
    let catalog = catalog_from_env_or_default().context("load field catalog")?;

    let pipeline_start = Instant::now();
    let outcome = process_batch(&catalog, &records);
    info!(
        batch = %batch,
        records = records.len(),
        findings = outcome.summary.total_alerts(),
        duration_ms = pipeline_start.elapsed().as_millis(),
        "pipeline complete"
    );

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("output")
    });

    let mut report_json = None;
    let mut pirep_lines = None;
    if !args.dry_run {
        let digest = sha256_hex(payload.as_bytes());
        if matches!(args.format, OutputFormatArg::Json | OutputFormatArg::Both) {
            let path = write_report_json(&output_dir, &batch, &outcome, &digest)
                .context("write batch report")?;
            info!(path = %path.display(), "batch report written");
            report_json = Some(path);
        }
        if matches!(args.format, OutputFormatArg::Lines | OutputFormatArg::Both) {
            let path = write_pirep_lines(&output_dir, &outcome)?;
            info!(path = %path.display(), "pirep lines written");
            pirep_lines = Some(path);
        }
    }

    Ok(ProcessResult {
        batch,
        output_dir,
        outcome,
        report_json,
        pirep_lines,
    })
}

fn derive_batch_label(args: &ProcessArgs) -> String {
    if let Some(label) = &args.batch {
        return label.clone();
    }
    args.input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("batch")
        .to_string()
}

fn write_pirep_lines(
    output_dir: &Path,
    outcome: &pirep_model::BatchOutcome,
) -> Result<std::path::PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let path = output_dir.join("pireps.txt");
    let mut body = outcome
        .pireps
        .iter()
        .map(render_pirep_line)
        .collect::<Vec<_>>()
        .join("\n");
    body.push('\n');
    std::fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
