//! Health handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{error::ApiError, AppState};

/// Health status body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness check; verifies the ledger store answers
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    state.journal.entries().await?;
    Ok(Json(HealthResponse { status: "ready" }))
}
