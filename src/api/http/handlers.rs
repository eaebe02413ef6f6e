// src/api/http/handlers.rs

use axum::{
    extract::{rejection::QueryRejection, Query},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{CalcQuery, CalcResponse};
use crate::calculator::evaluate;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /api/calc?a=..&b=..&op=..`
pub async fn calc_handler(
    query: Result<Query<CalcQuery>, QueryRejection>,
) -> ApiResult<Json<CalcResponse>> {
    let Query(query) = query.map_err(|e| ApiError::unprocessable_entity(e.body_text()))?;
    let calculation = evaluate(&query.op, query.a, query.b)?;
    Ok(Json(calculation.into()))
}
