//! Sales Service Library
//!
//! This crate provides the sales ledger over HTTP.
//! Standalone, it checks users against a remote user service; with the
//! `embedded` feature it can resolve them in-process instead.

pub mod client;
pub mod config;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use domain::{DomainResult, SalesPolicy};

use crate::client::{HttpUserDirectory, UserDirectory};
use crate::config::SalesServiceConfig;
use crate::repository::SaleStore;
use crate::routes::create_router;
use crate::service::{SaleManager, SaleService};
use crate::state::AppState;

/// Build a sale service over a fresh in-memory store.
pub fn in_memory_service(
    users: Arc<dyn UserDirectory>,
    policy: SalesPolicy,
) -> Arc<dyn SaleService> {
    let sale_repo = Arc::new(SaleStore::new());
    Arc::new(SaleManager::new(sale_repo, users, policy))
}

/// Sale service checking users over HTTP, with the remote policy.
pub fn remote_service(config: &SalesServiceConfig) -> DomainResult<Arc<dyn SaleService>> {
    let users = Arc::new(HttpUserDirectory::new(&config.user_service)?);
    let policy = config.policy(SalesPolicy::remote())?;
    Ok(in_memory_service(users, policy))
}

/// Sale service resolving users in-process, with the co-located policy.
#[cfg(feature = "embedded")]
pub fn co_located_service(
    users: Arc<dyn user_service_lib::service::UserService>,
    config: &SalesServiceConfig,
) -> DomainResult<Arc<dyn SaleService>> {
    let directory = Arc::new(client::LocalUserDirectory::new(users));
    let policy = config.policy(SalesPolicy::co_located())?;
    Ok(in_memory_service(directory, policy))
}

/// Run the sales service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
    user_port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SalesServiceConfig::from_env();
    config.host = host.to_string();
    config.port = port;
    config.user_service.base_url = format!("http://{}:{}", loopback(host), user_port);

    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(
    config: SalesServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create app state
    let state = AppState::new(remote_service(&config)?);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Sales service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wildcard bind addresses are not dialable.
fn loopback(host: &str) -> &str {
    match host {
        "0.0.0.0" | "::" => "127.0.0.1",
        other => other,
    }
}
