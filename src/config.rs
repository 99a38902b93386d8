use std::env;
use std::sync::Arc;

use crate::utils::error_log::ErrorLog;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub error_log: Arc<dyn ErrorLog>,
}

impl Config {
    pub fn init() -> Config {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .expect("PORT must be a number");

        // Uploads above this size fail in the multipart layer and surface
        // through the transport error branch of the upload handler.
        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse::<usize>()
            .expect("MAX_UPLOAD_BYTES must be a number");

        Config {
            server_host,
            server_port,
            max_upload_bytes,
        }
    }
}
