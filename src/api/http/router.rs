// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use axum::{routing::get, Router};

use super::handlers::calc_handler;

/// Calculator API routes, nested under /api
pub fn http_router() -> Router {
    Router::new().route("/calc", get(calc_handler))
}
