use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use pirep_ingest::decode_batch;
use pirep_transform::process_batch;

use crate::state::AppState;
use crate::templates::{error_page, index_page, results_page};

#[derive(Deserialize)]
pub struct ProcessForm {
    pub payload: String,
}

pub async fn index() -> impl IntoResponse {
    Html(index_page())
}

/// Form upload: runs the pipeline and renders the results page. A batch
/// with anomalies still renders fully; only structural decode failures
/// reject the request.
pub async fn process_form(
    State(state): State<AppState>,
    Form(form): Form<ProcessForm>,
) -> impl IntoResponse {
    match decode_batch(&form.payload) {
        Ok(records) => {
            let outcome = process_batch(&state.catalog, &records);
            info!(
                records = records.len(),
                findings = outcome.summary.total_alerts(),
                "form batch processed"
            );
            (StatusCode::OK, Html(results_page(&outcome)))
        }
        Err(error) => (StatusCode::BAD_REQUEST, Html(error_page(&error.to_string()))),
    }
}

/// JSON API sibling of the form route: raw payload in, `BatchOutcome` out.
pub async fn process_api(State(state): State<AppState>, body: String) -> impl IntoResponse {
    match decode_batch(&body) {
        Ok(records) => {
            let outcome = process_batch(&state.catalog, &records);
            info!(
                records = records.len(),
                findings = outcome.summary.total_alerts(),
                "api batch processed"
            );
            (StatusCode::OK, Json(json!({
                "pireps": outcome.pireps,
                "summary": outcome.summary,
                "findings": outcome.findings,
            })))
        }
        Err(error) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        ),
    }
}

/// The active field catalog, for clients that want the mapping contract.
pub async fn fields(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.specs().to_vec())
}
