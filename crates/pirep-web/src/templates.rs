//! Inline page markup. Two small pages only; the payload contract lives in
//! the pipeline crates, this module just wraps it in HTML.

use pirep_model::BatchOutcome;
use pirep_report::render_pirep_line;

const PAGE_STYLE: &str = "body{font-family:sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem}\
textarea{width:100%;font-family:monospace}table{border-collapse:collapse}\
td,th{border:1px solid #999;padding:0.25rem 0.5rem}code{background:#eee;padding:0 0.2rem}";

pub fn index_page() -> String {
    format!(
        "<!doctype html><html><head><title>PIREP Studio</title><style>{PAGE_STYLE}</style></head>\
         <body><h1>PIREP Studio</h1>\
         <p>Paste a telemetry batch: a delimited header row plus data rows, or one\
         <code>field=value</code> record per line.</p>\
         <form method=\"post\" action=\"/process\">\
         <textarea name=\"payload\" rows=\"12\" \
         placeholder=\"station,temp_c,pressure_psi&#10;KSEA,100,14.7\"></textarea>\
         <p><button type=\"submit\">Process batch</button></p>\
         </form></body></html>"
    )
}

pub fn error_page(message: &str) -> String {
    format!(
        "<!doctype html><html><head><title>PIREP Studio</title><style>{PAGE_STYLE}</style></head>\
         <body><h1>Batch rejected</h1><p>{}</p><p><a href=\"/\">Back</a></p></body></html>",
        escape(message)
    )
}

pub fn results_page(outcome: &BatchOutcome) -> String {
    let mut body = String::new();
    body.push_str("<h1>Batch results</h1>");

    body.push_str("<h2>PIREPs</h2><ul>");
    for entry in &outcome.pireps {
        body.push_str(&format!("<li><code>{}</code></li>", escape(&render_pirep_line(entry))));
    }
    body.push_str("</ul>");

    body.push_str("<h2>Summary</h2>");
    body.push_str(&format!(
        "<p>{} record(s), {} alert(s).</p>",
        outcome.summary.record_count,
        outcome.summary.total_alerts()
    ));
    body.push_str(
        "<table><tr><th>Field</th><th>Values</th><th>Skipped</th>\
         <th>Mean</th><th>Min</th><th>Max</th></tr>",
    );
    for (field, stats) in &outcome.summary.fields {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(field),
            stats.count,
            stats.skipped,
            number(stats.mean),
            number(stats.min),
            number(stats.max)
        ));
    }
    body.push_str("</table>");

    if outcome.has_findings() {
        body.push_str("<h2>Findings</h2>");
        body.push_str("<table><tr><th>Record</th><th>Field</th><th>Kind</th><th>Detail</th></tr>");
        for (index, findings) in &outcome.findings {
            for finding in findings {
                body.push_str(&format!(
                    "<tr><td>{index}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&finding.field),
                    finding.kind,
                    escape(&finding.detail)
                ));
            }
        }
        body.push_str("</table>");
    }

    body.push_str("<p><a href=\"/\">Process another batch</a></p>");
    format!(
        "<!doctype html><html><head><title>PIREP Studio</title><style>{PAGE_STYLE}</style></head>\
         <body>{body}</body></html>"
    )
}

fn number(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value}"),
        None => "-".to_string(),
    }
}

/// Minimal HTML escaping for user-supplied text.
fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
