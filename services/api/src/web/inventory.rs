//! services/api/src/web/inventory.rs
//!
//! Handlers for the ingredient inventory.

use crate::error::{reject, HandlerError};
use crate::web::{
    protocol::{CreateIngredientRequest, DecrementRequest, UpdateIngredientRequest},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/ingredients",
    responses((status = 200, description = "All ingredients on hand")),
    tag = "inventory"
)]
pub async fn list_ingredients_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let ingredients = app_state.kitchen.list_ingredients().await.map_err(reject)?;
    Ok(Json(ingredients))
}

#[utoipa::path(
    post,
    path = "/ingredients",
    request_body = CreateIngredientRequest,
    responses(
        (status = 201, description = "Ingredient added"),
        (status = 400, description = "Missing name or unit, or a negative quantity")
    ),
    tag = "inventory"
)]
pub async fn create_ingredient_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateIngredientRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let ingredient = app_state
        .kitchen
        .add_ingredient(req.into())
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

#[utoipa::path(
    patch,
    path = "/ingredients/{id}",
    request_body = UpdateIngredientRequest,
    params(("id" = Uuid, Path, description = "Ingredient id")),
    responses(
        (status = 200, description = "Updated ingredient"),
        (status = 404, description = "Ingredient not found")
    ),
    tag = "inventory"
)]
pub async fn update_ingredient_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateIngredientRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let ingredient = app_state
        .kitchen
        .update_ingredient(id, req.into())
        .await
        .map_err(reject)?;
    Ok(Json(ingredient))
}

/// Use up some of an ingredient. The quantity never drops below zero.
#[utoipa::path(
    post,
    path = "/ingredients/{id}/decrement",
    request_body = DecrementRequest,
    params(("id" = Uuid, Path, description = "Ingredient id")),
    responses(
        (status = 200, description = "Updated ingredient"),
        (status = 404, description = "Ingredient not found")
    ),
    tag = "inventory"
)]
pub async fn decrement_ingredient_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<DecrementRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let ingredient = app_state
        .kitchen
        .decrement_ingredient(id, req.amount)
        .await
        .map_err(reject)?;
    Ok(Json(ingredient))
}

#[utoipa::path(
    delete,
    path = "/ingredients/{id}",
    params(("id" = Uuid, Path, description = "Ingredient id")),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 404, description = "Ingredient not found")
    ),
    tag = "inventory"
)]
pub async fn delete_ingredient_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HandlerError> {
    app_state.kitchen.delete_ingredient(id).await.map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}
