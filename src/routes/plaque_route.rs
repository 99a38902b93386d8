use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::config::AppState;
use crate::handlers::plaque_handler::generate_plaque_handler;

pub fn plaque_routes(max_upload_bytes: usize) -> Router<AppState> {
    // Non-POST requests on this route get an automatic 405.
    Router::new()
        .route("/generate", post(generate_plaque_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
