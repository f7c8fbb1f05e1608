//! Route configuration.

use axum::{response::Json, routing::get, Router};
use utoipa::OpenApi;

use common::health_routes;

use crate::handlers::user_routes;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// User API routes only, with state applied.
///
/// Mounted by the standalone router and by the co-located binary.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/users", user_routes())
        .with_state(state)
}

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .merge(health_routes())
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api_routes(state))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
