//! Route definitions for the API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::check_item,
        handlers::root,
        handlers::health_check,
    ),
    components(schemas(
        crate::api::types::CheckItemRequest,
        crate::api::types::CheckItemResponse,
        crate::api::types::RootResponse,
        crate::api::types::HealthResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "items", description = "Baggage item checks"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "TSA Item Checker API",
        version = "1.0.0",
        description = "Check if items are allowed in TSA carry-on or checked baggage",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Item checks
        .route("/check-item", post(handlers::check_item))
        // Health
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
