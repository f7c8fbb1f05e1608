//! Liveness check shared by both services.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;

/// Ping response.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

/// Create the `/ping` route.
pub fn health_routes() -> Router {
    Router::new().route("/ping", get(ping))
}

/// Liveness endpoint.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}
