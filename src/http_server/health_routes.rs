//! Health and fallback routes

use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::companies::CompanyError;

/// `/health` liveness route
pub fn health_routes() -> Router {
    Router::new().route(
        "/health",
        get(health_handler).fallback(method_not_allowed_fallback),
    )
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Fallback for unmatched routes, in the common error shape
pub async fn not_found_fallback() -> CompanyError {
    CompanyError::NotFound("Not Found".to_string())
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed_fallback() -> CompanyError {
    CompanyError::MethodNotAllowed
}
