use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{fields, index, process_api, process_form};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/process", post(process_form))
        .route("/api/process", post(process_api))
        .route("/fields", get(fields))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
