//! User Service Library
//!
//! This crate provides the user registry over HTTP.
//! It can be run as a standalone service or embedded in the combined binary.

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

use crate::config::UserServiceConfig;
use crate::repository::UserStore;
use crate::routes::create_router;
use crate::service::{UserManager, UserService};
use crate::state::AppState;

/// Build a user service over a fresh in-memory store.
pub fn in_memory_service() -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new());
    Arc::new(UserManager::new(user_repo))
}

/// Run the user service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = UserServiceConfig::from_env();
    config.host = host.to_string();
    config.port = port;
    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(
    config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create app state
    let state = AppState::new(in_memory_service());

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("User service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use domain::DomainError;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::service::MockUserService;

    fn app() -> Router {
        create_router(AppState::new(in_memory_service()))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_ana(app: &Router) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/users",
            Some(json!({"name": "Ana", "address": "Main St", "nickname": "Anita"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    #[tokio::test]
    async fn test_ping() {
        let (status, body) = send(&app(), Method::GET, "/ping", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "pong"}));
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (status, body) = send(&app(), Method::GET, "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/users"].is_object());
        assert!(body["paths"]["/users/{id}"].is_object());
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let app = app();
        let created = create_ana(&app).await;

        assert_eq!(created["status"], "active");
        assert_eq!(created["version"], 1);

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&app, Method::GET, &format!("/users/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_user_without_nickname_omits_field() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Bea", "address": "Second Ave", "nickname": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body.get("nickname").is_none());
    }

    #[tokio::test]
    async fn test_create_user_invalid_name() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/users",
            Some(json!({"name": "An4", "address": "Main St"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/users")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_patch_user() {
        let app = app();
        let created = create_ana(&app).await;
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(
            &app,
            Method::PATCH,
            &format!("/users/{id}"),
            Some(json!({"address": "Second Ave 12"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["address"], "Second Ave 12");
        assert_eq!(body["version"], 2);

        let (status, body) =
            send(&app, Method::PATCH, &format!("/users/{id}"), Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_patch_missing_user_is_not_found_before_validation() {
        let (status, _) = send(
            &app(),
            Method::PATCH,
            "/users/missing",
            Some(json!({"name": "B4d"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_hides_user() {
        let app = app();
        let created = create_ana(&app).await;
        let id = created["id"].as_str().unwrap();

        let (status, _) = send(&app, Method::DELETE, &format!("/users/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &format!("/users/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app, Method::DELETE, "/users/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let mut service = MockUserService::new();
        service
            .expect_get_user()
            .returning(|_| Err(DomainError::storage("user table lock poisoned")));
        service
            .expect_delete_user()
            .returning(|_| Err(DomainError::EmptyIdentifier));
        let app = create_router(AppState::new(Arc::new(service)));

        let (status, body) = send(&app, Method::GET, "/users/u1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body["error"]["message"].as_str().unwrap().contains("poisoned"));

        let (status, body) = send(&app, Method::DELETE, "/users/u1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_version_conflict_is_conflict() {
        let mut service = MockUserService::new();
        service
            .expect_update_user()
            .withf(|id, update| id == "u1" && update.name.as_deref() == Some("Bea"))
            .returning(|_, _| Err(DomainError::version_conflict("user u1 is at version 3")));
        let app = create_router(AppState::new(Arc::new(service)));

        let (status, body) =
            send(&app, Method::PATCH, "/users/u1", Some(json!({"name": "Bea"}))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }
}
