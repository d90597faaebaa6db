use crate::dtos::InfoResponse;
use axum::Json;

// Replaces the Flask demo's "Flask Jenkins Demo" / "Your Name" placeholders.
// Author and description come from the crate manifest.
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: "Pipeline Demo",
        author: env!("CARGO_PKG_AUTHORS"),
        description: env!("CARGO_PKG_DESCRIPTION"),
    })
}
