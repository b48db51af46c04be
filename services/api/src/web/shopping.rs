//! services/api/src/web/shopping.rs
//!
//! Handlers for the shopping list and its text/CSV export.

use crate::error::{reject, HandlerError};
use crate::web::{
    protocol::{CreateShoppingItemRequest, ExportQuery, UpdateShoppingItemRequest},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use recipe_assistant_core::ExportFormat;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/shopping-list",
    responses((status = 200, description = "All items in insertion order")),
    tag = "shopping"
)]
pub async fn list_shopping_items_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let items = app_state.kitchen.list_shopping_items().await.map_err(reject)?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/shopping-list",
    request_body = CreateShoppingItemRequest,
    responses(
        (status = 201, description = "Item added"),
        (status = 400, description = "Name is required")
    ),
    tag = "shopping"
)]
pub async fn create_shopping_item_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateShoppingItemRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let item = app_state
        .kitchen
        .add_shopping_item(req.into())
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    patch,
    path = "/shopping-list/{id}",
    request_body = UpdateShoppingItemRequest,
    params(("id" = Uuid, Path, description = "Shopping list item id")),
    responses(
        (status = 200, description = "Updated item"),
        (status = 404, description = "Shopping list item not found")
    ),
    tag = "shopping"
)]
pub async fn update_shopping_item_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateShoppingItemRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let item = app_state
        .kitchen
        .update_shopping_item(id, req.into())
        .await
        .map_err(reject)?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/shopping-list/{id}",
    params(("id" = Uuid, Path, description = "Shopping list item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Shopping list item not found")
    ),
    tag = "shopping"
)]
pub async fn delete_shopping_item_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HandlerError> {
    app_state.kitchen.delete_shopping_item(id).await.map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Download the shopping list as plain text or CSV.
#[utoipa::path(
    get,
    path = "/shopping-list/export",
    params(ExportQuery),
    responses(
        (status = 200, description = "The exported document (text/plain or text/csv)"),
        (status = 400, description = "Unknown format")
    ),
    tag = "shopping"
)]
pub async fn export_shopping_list_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let format = match query.format.as_deref() {
        Some(raw) => raw
            .parse::<ExportFormat>()
            .map_err(|msg| (StatusCode::BAD_REQUEST, msg))?,
        None => ExportFormat::default(),
    };

    let document = app_state
        .kitchen
        .export_shopping_list(format)
        .await
        .map_err(reject)?;

    let disposition = format!("attachment; filename=\"{}\"", format.file_name());
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    ))
}
