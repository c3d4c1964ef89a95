// src/main.rs
use std::net::SocketAddr;

use catalog_api::{app, config::Config, telemetry};
use dotenvy::dotenv;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    // Load environment variables before the filter reads RUST_LOG
    dotenv().ok();

    // Initialize logging
    telemetry::init();

    let config = Config::from_env();
    let app = app::build_app(&config);

    // Try port..port+N to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=config.port_fallback_attempts {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on http://{}{}", addr, config.base_path);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
        std::process::exit(1);
    }
}
