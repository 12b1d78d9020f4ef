//! Operational endpoints: liveness, readiness and status.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{
    ApiError, ApiResponse, AppState, HealthDto, ReadinessChecks, ReadinessDto, StatusDto,
};

/// `GET /api/system/health/live`
pub async fn health_live() -> Json<ApiResponse<HealthDto>> {
    Json(ApiResponse::success(HealthDto { status: "alive" }))
}

/// `GET /api/system/health/ready`
///
/// Answers 503 when the database does not respond to a ping.
pub async fn health_ready(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ReadinessDto>>, ApiError> {
    state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(format!("database ping failed: {e}")))?;

    Ok(Json(ApiResponse::success(ReadinessDto {
        ready: true,
        checks: ReadinessChecks { database: true },
    })))
}

/// `GET /api/system/status`
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StatusDto>>, ApiError> {
    let movie_count = state.movies().count().await?;

    Ok(Json(ApiResponse::success(StatusDto {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        movie_count,
    })))
}
