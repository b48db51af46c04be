//! services/api/src/web/recipes.rs
//!
//! Handlers for the recipe library, feasibility, scaling and shortfalls.

use crate::error::{reject, HandlerError};
use crate::web::{
    protocol::{
        CreateRecipeRequest, OptionalServingsQuery, RecipeSearchQuery, ServingsQuery,
        ServingsRequest,
    },
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/recipes",
    params(RecipeSearchQuery),
    responses((status = 200, description = "Recipes in library order")),
    tag = "recipes"
)]
pub async fn list_recipes_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<RecipeSearchQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let recipes = app_state
        .kitchen
        .list_recipes(query.search.as_deref())
        .await
        .map_err(reject)?;
    Ok(Json(recipes))
}

#[utoipa::path(
    post,
    path = "/recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created"),
        (status = 400, description = "Missing title, zero servings or misnumbered steps")
    ),
    tag = "recipes"
)]
pub async fn create_recipe_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let recipe = app_state
        .kitchen
        .create_recipe(req.into())
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    params(("id" = Uuid, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe"),
        (status = 404, description = "Recipe not found")
    ),
    tag = "recipes"
)]
pub async fn get_recipe_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HandlerError> {
    let recipe = app_state.kitchen.get_recipe(id).await.map_err(reject)?;
    Ok(Json(recipe))
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    params(("id" = Uuid, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found")
    ),
    tag = "recipes"
)]
pub async fn delete_recipe_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HandlerError> {
    app_state.kitchen.delete_recipe(id).await.map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Recipes that can be made from the current inventory.
#[utoipa::path(
    get,
    path = "/recipes/feasible",
    params(OptionalServingsQuery),
    responses(
        (status = 200, description = "[{id, title, description}] in library order"),
        (status = 400, description = "servings is 0")
    ),
    tag = "recipes"
)]
pub async fn feasible_recipes_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<OptionalServingsQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let feasible = app_state
        .kitchen
        .list_feasible_recipes(query.servings)
        .await
        .map_err(reject)?;
    Ok(Json(feasible))
}

/// What is lacking to make a recipe at the given servings.
#[utoipa::path(
    get,
    path = "/recipes/{id}/missing",
    params(("id" = Uuid, Path, description = "Recipe id"), ServingsQuery),
    responses(
        (status = 200, description = "Shortfall records; empty when the recipe is feasible"),
        (status = 404, description = "Recipe not found")
    ),
    tag = "recipes"
)]
pub async fn missing_ingredients_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<ServingsQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let missing = app_state
        .kitchen
        .missing_ingredients(id, query.servings)
        .await
        .map_err(reject)?;
    Ok(Json(missing))
}

/// A recipe's ingredient amounts scaled to the given servings.
#[utoipa::path(
    get,
    path = "/recipes/{id}/scaled",
    params(("id" = Uuid, Path, description = "Recipe id"), ServingsQuery),
    responses(
        (status = 200, description = "Scaled ingredient list"),
        (status = 404, description = "Recipe not found")
    ),
    tag = "recipes"
)]
pub async fn scale_recipe_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<ServingsQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let scaled = app_state
        .kitchen
        .scale_recipe(id, query.servings)
        .await
        .map_err(reject)?;
    Ok(Json(scaled))
}

/// Append every shortfall of a recipe to the shopping list.
#[utoipa::path(
    post,
    path = "/recipes/{id}/shopping-list",
    request_body = ServingsRequest,
    params(("id" = Uuid, Path, description = "Recipe id")),
    responses(
        (status = 201, description = "The appended shopping list items"),
        (status = 404, description = "Recipe not found")
    ),
    tag = "recipes"
)]
pub async fn add_missing_to_shopping_list_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ServingsRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let added = app_state
        .kitchen
        .add_missing_to_shopping_list(id, req.servings)
        .await
        .map_err(reject)?;
    info!("Added {} items to the shopping list from recipe {}", added.len(), id);
    Ok((StatusCode::CREATED, Json(added)))
}
