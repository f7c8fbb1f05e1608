//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use common::{AppResult, JsonBody};
use domain::{CreateUser, UpdateUser, User};

use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get active user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found or deleted")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(user))
}

/// Partially update a user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation error or empty update"),
        (status = 404, description = "User not found or deleted"),
        (status = 409, description = "Concurrent modification")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(&id, update).await?;
    Ok(Json(user))
}

/// Soft delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
