//! HTTP request handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::api::types::*;
use crate::error::{CheckerError, CheckerResult};
use crate::AppState;

const SERVICE_NAME: &str = "TSA Item Checker API";

/// Check whether an item is allowed in carry-on or checked baggage.
///
/// POST /check-item
#[utoipa::path(
    post,
    path = "/check-item",
    request_body = CheckItemRequest,
    responses(
        (status = 200, description = "Baggage rules for the item", body = CheckItemResponse),
        (status = 400, description = "Body is malformed or item name is empty or too long", body = crate::error::ErrorResponse),
        (status = 500, description = "AI service error or unusable answer", body = crate::error::ErrorResponse),
        (status = 504, description = "AI service timed out", body = crate::error::ErrorResponse)
    ),
    tag = "items"
)]
pub async fn check_item(
    State(state): State<AppState>,
    payload: Result<Json<CheckItemRequest>, JsonRejection>,
) -> CheckerResult<Json<CheckItemResponse>> {
    let Json(request) = payload?;
    let submitted = request.item.unwrap_or_default();
    let item = submitted.trim();

    if item.is_empty() {
        return Err(CheckerError::BadRequest(
            "Item name cannot be empty".to_string(),
        ));
    }

    if item.chars().count() > state.max_item_chars {
        return Err(CheckerError::BadRequest(format!(
            "Item name cannot exceed {} characters",
            state.max_item_chars
        )));
    }

    tracing::info!(item = %item, "Checking item");

    let verdict = state.advisor.assess(item).await?;

    tracing::info!(
        item = %item,
        carry_on_allowed = verdict.carry_on_allowed,
        checked_baggage_allowed = verdict.checked_baggage_allowed,
        "Item check complete"
    );

    Ok(Json(CheckItemResponse::new(submitted, verdict)))
}

/// Root liveness check.
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{} is running!", SERVICE_NAME),
        status: "healthy".to_string(),
    })
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        api_key_configured: state.advisor.is_configured(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
