//! PIREP Studio web server: a thin HTTP boundary around the processing
//! pipeline. All behavior lives in the pipeline crates; this binary only
//! decodes uploads and renders results.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pirep_standards::catalog_from_env_or_default;

mod handlers;
mod router;
mod state;
mod templates;

use crate::router::app_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = catalog_from_env_or_default().context("load field catalog")?;
    let state = AppState {
        catalog: Arc::new(catalog),
    };
    let app = app_router(state);

    let addr = std::env::var("PIREP_WEB_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, "pirep-web listening");
    axum::serve(listener, app).await?;
    Ok(())
}
