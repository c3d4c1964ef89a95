//! Router assembly shared by the server binary and the tests.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::Config;
use crate::routes;
use crate::state::AppState;
use crate::store::CatalogStore;

/// Builds the full application over a freshly seeded catalog.
pub fn build_app(config: &Config) -> Router {
    build_app_with_store(config, CatalogStore::seeded())
}

pub fn build_app_with_store(config: &Config, store: CatalogStore) -> Router {
    let app_state = AppState::new(store, &config.base_path);

    let api = routes::create_router()
        .route("/", get(|| async { "Catalog API" }))
        .route("/health", get(health_check));

    let router = if config.base_path.is_empty() {
        api
    } else {
        Router::new().nest(&config.base_path, api)
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(app_state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match &config.cors_allowed_origins {
        None => base.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(v) => Some(v),
                    Err(e) => {
                        warn!(origin = %o, error = %e, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            base.allow_origin(origins)
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}
