use crate::dtos::HomeResponse;
use axum::Json;

// Branded for this service rather than the Flask demo it replaces
// ("Hello from Flask!"); only `status` is fixed by clients.
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Hello from demo-service!",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
