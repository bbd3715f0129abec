//! Sweep trigger and statistics handlers.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::response::{StatsResponse, SweepResponse};
use crate::error::ApiError;
use crate::extractors::CronAuth;
use crate::state::AppState;

/// GET/POST /api/visa-alerts/check
///
/// Runs one full sweep. Requires the configured sweep secret; the
/// `CronAuth` extractor rejects with 401 before any data access.
pub async fn run_sweep(
    _auth: CronAuth,
    State(state): State<AppState>,
) -> Result<Json<SweepResponse>, ApiError> {
    let report = state.sweep_engine.run().await?;

    let message = format!(
        "Sweep complete: {} notification(s) dispatched, {} already handled",
        report.dispatched, report.already_handled
    );

    Ok(Json(SweepResponse {
        success: true,
        message,
        stats: report,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// GET /api/visa-alerts/stats
pub async fn visa_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.statistics.report().await?;
    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
