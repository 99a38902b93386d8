use dotenvy::dotenv;
use mesplaques::config::{AppState, Config};
use mesplaques::routes;
use mesplaques::utils::error_log::TracingErrorLog;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = Config::init();
    println!("🚀 Starting Mesplaques Backend...");

    // 1. Build App State
    let state = AppState {
        error_log: Arc::new(TracingErrorLog),
    };

    // 2. Initialize Router
    let app = routes::create_routes(cfg.max_upload_bytes).with_state(state);

    // 3. Start Server
    let addr_str = format!("{}:{}", cfg.server_host, cfg.server_port);
    let addr: SocketAddr = addr_str.parse().expect("Invalid address");

    println!("🎯 Server ready! Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
