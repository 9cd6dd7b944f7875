// GET handlers: version, metrics

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /metrics — interrupt, context switch, CPU usage and memory counters.
/// 500 with a plain-text body when a pseudo-file cannot be read.
pub(super) async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.collector.collect().await {
        Ok(metrics) => axum::Json(metrics).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "metrics collection failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.public_message()).into_response()
        }
    }
}
