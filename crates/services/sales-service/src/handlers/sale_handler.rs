//! Sale handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::{AppResult, JsonBody, ValidatedJson};
use domain::{CreateSale, Sale, SalesReport, UpdateSale};

use crate::state::AppState;

/// Report query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Owner of the sales
    #[serde(default)]
    pub user_id: String,
    /// approved, rejected or pending; empty for all
    #[serde(default)]
    pub status: String,
}

/// Create sale routes
pub fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_sales_report).post(create_sale))
        .route("/:id", get(get_sale).patch(update_sale))
}

/// Register a sale for an existing user
#[utoipa::path(
    post,
    path = "/sales",
    tag = "Sales",
    request_body = CreateSale,
    responses(
        (status = 201, description = "Sale created", body = Sale),
        (status = 400, description = "Invalid amount or unknown user"),
        (status = 500, description = "User service unreachable")
    )
)]
pub async fn create_sale(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateSale>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let sale = state.sale_service.create_sale(input).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// Report on a user's sales
#[utoipa::path(
    get,
    path = "/sales",
    tag = "Sales",
    params(ReportQuery),
    responses(
        (status = 200, description = "Sales report", body = SalesReport),
        (status = 400, description = "Unknown status filter")
    )
)]
pub async fn get_sales_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<SalesReport>> {
    let report = state
        .sale_service
        .get_sales_report(&query.user_id, &query.status)
        .await?;
    Ok(Json(report))
}

/// Get sale by ID
#[utoipa::path(
    get,
    path = "/sales/{id}",
    tag = "Sales",
    params(
        ("id" = String, Path, description = "Sale ID")
    ),
    responses(
        (status = 200, description = "Sale found", body = Sale),
        (status = 404, description = "Sale not found")
    )
)]
pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Sale>> {
    let sale = state.sale_service.get_sale(&id).await?;
    Ok(Json(sale))
}

/// Approve or reject a pending sale
#[utoipa::path(
    patch,
    path = "/sales/{id}",
    tag = "Sales",
    params(
        ("id" = String, Path, description = "Sale ID")
    ),
    request_body = UpdateSale,
    responses(
        (status = 200, description = "Sale updated", body = Sale),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Sale not found"),
        (status = 409, description = "Sale already approved or rejected")
    )
)]
pub async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(update): ValidatedJson<UpdateSale>,
) -> AppResult<Json<Sale>> {
    let sale = state.sale_service.update_sale(&id, update).await?;
    Ok(Json(sale))
}
