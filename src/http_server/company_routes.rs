//! Company HTTP Routes
//!
//! Thin axum adapter over `CompanyService`: pulls the path code and raw
//! body out of the request, hands plain values to the service and wraps
//! results in their JSON envelopes.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::health_routes::method_not_allowed_fallback;
use crate::companies::{
    CompaniesResponse, CompanyChanges, CompanyError, CompanyResponse, CompanyResult,
    CompanyService, CompanyStore, NewCompany, StatusResponse,
};

/// Shared state type
type CompanyState<S> = Arc<CompanyService<S>>;

/// Create company routes, to be nested under `/companies`
pub fn company_routes<S: CompanyStore + 'static>(service: CompanyState<S>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_handler::<S>)
                .post(create_handler::<S>)
                .fallback(method_not_allowed_fallback),
        )
        .route(
            "/:code",
            get(get_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>)
                .fallback(method_not_allowed_fallback),
        )
        .with_state(service)
}

/// Decode an optional JSON body.
///
/// An empty body or a literal `null` is "absent" (`Ok(None)`); `{}` is
/// present. Anything that fails to decode is a bad request.
pub fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> CompanyResult<Option<T>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| CompanyError::BadRequest(format!("Invalid JSON body: {}", e)))?;
    if value.is_null() {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| CompanyError::BadRequest(format!("Invalid company information: {}", e)))
}

/// Unwrap the `:code` segment, reporting undecodable paths in the common
/// error shape.
fn code_param(path: Result<Path<String>, PathRejection>) -> CompanyResult<String> {
    path.map(|Path(code)| code).map_err(|rejection| {
        CompanyError::BadRequest(format!("Invalid company code: {}", rejection.body_text()))
    })
}

/// GET /companies
async fn list_handler<S: CompanyStore + 'static>(
    State(service): State<CompanyState<S>>,
) -> CompanyResult<Json<CompaniesResponse>> {
    let companies = service.list().await?;
    Ok(Json(CompaniesResponse::new(companies)))
}

/// GET /companies/:code
async fn get_handler<S: CompanyStore + 'static>(
    State(service): State<CompanyState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> CompanyResult<Json<CompanyResponse>> {
    let code = code_param(path)?;
    let company = service.get(&code).await?;
    Ok(Json(CompanyResponse::new(company)))
}

/// POST /companies
async fn create_handler<S: CompanyStore + 'static>(
    State(service): State<CompanyState<S>>,
    body: Bytes,
) -> CompanyResult<(StatusCode, Json<CompanyResponse>)> {
    let new = decode_body::<NewCompany>(&body)?;
    let company = service.create(new).await?;
    Ok((StatusCode::CREATED, Json(CompanyResponse::new(company))))
}

/// PUT /companies/:code
async fn update_handler<S: CompanyStore + 'static>(
    State(service): State<CompanyState<S>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> CompanyResult<Json<CompanyResponse>> {
    let code = code_param(path)?;
    let changes = decode_body::<CompanyChanges>(&body)?;
    let company = service.update(&code, changes).await?;
    Ok(Json(CompanyResponse::new(company)))
}

/// DELETE /companies/:code
async fn delete_handler<S: CompanyStore + 'static>(
    State(service): State<CompanyState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> CompanyResult<Json<StatusResponse>> {
    let code = code_param(path)?;
    service.delete(&code).await?;
    Ok(Json(StatusResponse::deleted()))
}
