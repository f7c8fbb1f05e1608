//! Co-located deployment: users and sales served by one router.
//!
//! Sales resolve users in-process and follow the co-located policy.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

use common::health_routes;
use domain::DomainResult;
use sales_service_lib::config::SalesServiceConfig;
use sales_service_lib::service::SaleService;
use user_service_lib::service::UserService;

/// Both services over fresh in-memory stores, sharing the user registry.
pub fn co_located_services(
    config: &SalesServiceConfig,
) -> DomainResult<(Arc<dyn UserService>, Arc<dyn SaleService>)> {
    let users = user_service_lib::in_memory_service();
    let sales = sales_service_lib::co_located_service(users.clone(), config)?;
    Ok((users, sales))
}

/// Create the router serving `/users`, `/sales`, `/ping` and the merged docs.
pub fn create_router(users: Arc<dyn UserService>, sales: Arc<dyn SaleService>) -> Router {
    Router::new()
        .merge(health_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(user_service_lib::routes::api_routes(
            user_service_lib::state::AppState::new(users),
        ))
        .merge(sales_service_lib::routes::api_routes(
            sales_service_lib::state::AppState::new(sales),
        ))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    let mut doc = user_service_lib::openapi::ApiDoc::openapi();
    doc.merge(sales_service_lib::openapi::ApiDoc::openapi());
    Json(doc)
}

/// Run the co-located server.
pub async fn run_co_located(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = SalesServiceConfig::from_env();
    let (users, sales) = co_located_services(&config)?;

    // Build router
    let app = create_router(users, sales).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Combined service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
