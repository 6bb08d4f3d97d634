//! Request handlers

use anchor_platform_core::rpc::endpoint;
use anchor_platform_core::APP_VERSION;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::error::{ServerError, ServerResult};
use super::state::AppState;

/// Health status response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub upstream: String,
}

/// Liveness probe
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: APP_VERSION,
        uptime_seconds: state.uptime_seconds(),
        upstream: endpoint(&state.config.api.url),
    })
}

/// Forward a JSON-RPC call to the Anchor Platform API and relay its answer
pub async fn forward_rpc(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ServerResult<Response> {
    let target = endpoint(&state.config.api.url);

    let upstream = state
        .upstream
        .post(&target)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body.to_vec())
        .send()
        .await
        .map_err(|e| ServerError::Upstream(format!("{}: {}", target, e)))?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let payload = upstream
        .bytes()
        .await
        .map_err(|e| ServerError::Upstream(format!("{}: {}", target, e)))?;

    tracing::debug!(status = %status, bytes = payload.len(), "Relayed JSON-RPC response");

    Ok((status, [(CONTENT_TYPE, "application/json")], payload.to_vec()).into_response())
}
