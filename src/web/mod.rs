// src/web/mod.rs
// Web server layer: API routes, UI assets and middleware

pub mod embedded;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::api::http::{health_handler, http_router};
use crate::config::CalcConfig;
use embedded::{serve_embedded, EmbeddedAssets};

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = if origin.trim() == "*" {
        AllowOrigin::from(Any)
    } else {
        match HeaderValue::from_str(origin.trim()) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                warn!("Invalid CORS origin '{}', allowing any", origin);
                AllowOrigin::from(Any)
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

/// Create the web server router
pub fn create_router(config: &CalcConfig) -> Router {
    let max_age = config.static_max_age;

    Router::new()
        .route("/", get(move || async move { serve_embedded("index.html", max_age) }))
        .route("/health", get(health_handler))
        .nest("/api", http_router())
        .nest_service("/static", EmbeddedAssets::new(max_age))
        .layer(cors_layer(&config.cors_origin))
        .layer(TraceLayer::new_for_http())
}
