pub mod plaque_handler;

use axum::{response::IntoResponse, Json};
use chrono::Utc;

pub async fn health_check_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "up",
        "server_time": Utc::now().to_rfc3339(),
    }))
}
