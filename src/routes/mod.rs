use crate::config::AppState;
use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod plaque_route;

pub fn create_routes(max_upload_bytes: usize) -> Router<AppState> {
    let cors = CorsLayer::new()
        // Allow `GET`, `POST`, `OPTIONS` methods
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        // Allow requests from any origin
        .allow_origin(Any)
        // Allow any headers
        .allow_headers(Any);

    Router::new()
        .nest(
            "/api/plaques",
            plaque_route::plaque_routes(max_upload_bytes),
        )
        // Health check
        .route(
            "/api/health",
            axum::routing::get(crate::handlers::health_check_handler),
        )
        .layer(cors)
}
