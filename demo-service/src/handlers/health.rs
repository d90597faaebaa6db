use crate::dtos::HealthResponse;
use crate::SERVICE_NAME;
use axum::{http::StatusCode, Json};

/// Liveness probe for monitoring. There are no dependencies to check.
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: SERVICE_NAME,
        }),
    )
}
