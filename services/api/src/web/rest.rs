//! services/api/src/web/rest.rs
//!
//! Contains the master definition for the OpenAPI specification and the
//! router that wires every REST handler to its route.

use crate::web::{
    chat::*, cook::*, inventory::*, middleware::log_requests, protocol::*, recipes::*,
    shopping::*, state::AppState,
};
use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::warn;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        send_chat_message_handler,
        chat_history_handler,
        list_ingredients_handler,
        create_ingredient_handler,
        update_ingredient_handler,
        decrement_ingredient_handler,
        delete_ingredient_handler,
        list_recipes_handler,
        create_recipe_handler,
        get_recipe_handler,
        delete_recipe_handler,
        feasible_recipes_handler,
        missing_ingredients_handler,
        scale_recipe_handler,
        add_missing_to_shopping_list_handler,
        start_cook_session_handler,
        list_cook_sessions_handler,
        active_cook_session_handler,
        get_cook_session_handler,
        advance_step_handler,
        end_cook_session_handler,
        add_timer_handler,
        remove_timer_handler,
        list_shopping_items_handler,
        create_shopping_item_handler,
        update_shopping_item_handler,
        delete_shopping_item_handler,
        export_shopping_list_handler,
    ),
    components(
        schemas(
            ChatRequest,
            CreateIngredientRequest,
            UpdateIngredientRequest,
            DecrementRequest,
            CreateRecipeRequest,
            ServingsRequest,
            StartCookSessionRequest,
            AdvanceStepRequest,
            AddTimerRequest,
            CreateShoppingItemRequest,
            UpdateShoppingItemRequest,
        )
    ),
    tags(
        (name = "chat", description = "Rule-based cooking assistant chat."),
        (name = "inventory", description = "Ingredients on hand."),
        (name = "recipes", description = "Recipe library, feasibility and scaling."),
        (name = "cook", description = "Guided cook sessions and step timers."),
        (name = "shopping", description = "Shopping list and export.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Router
//=========================================================================================

/// Builds the API router with request logging and CORS applied.
///
/// An unparsable `CORS_ALLOWED_ORIGIN` disables CORS instead of failing startup.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route(
            "/chat",
            post(send_chat_message_handler).get(chat_history_handler),
        )
        .route(
            "/ingredients",
            get(list_ingredients_handler).post(create_ingredient_handler),
        )
        .route(
            "/ingredients/{id}",
            patch(update_ingredient_handler).delete(delete_ingredient_handler),
        )
        .route(
            "/ingredients/{id}/decrement",
            post(decrement_ingredient_handler),
        )
        .route(
            "/recipes",
            get(list_recipes_handler).post(create_recipe_handler),
        )
        .route("/recipes/feasible", get(feasible_recipes_handler))
        .route(
            "/recipes/{id}",
            get(get_recipe_handler).delete(delete_recipe_handler),
        )
        .route("/recipes/{id}/missing", get(missing_ingredients_handler))
        .route("/recipes/{id}/scaled", get(scale_recipe_handler))
        .route(
            "/recipes/{id}/shopping-list",
            post(add_missing_to_shopping_list_handler),
        )
        .route(
            "/cook-sessions",
            get(list_cook_sessions_handler).post(start_cook_session_handler),
        )
        .route("/cook-sessions/active", get(active_cook_session_handler))
        .route("/cook-sessions/{id}", get(get_cook_session_handler))
        .route("/cook-sessions/{id}/step", post(advance_step_handler))
        .route("/cook-sessions/{id}/end", post(end_cook_session_handler))
        .route("/cook-sessions/{id}/timers", post(add_timer_handler))
        .route(
            "/cook-sessions/{id}/timers/{timer_id}",
            axum::routing::delete(remove_timer_handler),
        )
        .route(
            "/shopping-list",
            get(list_shopping_items_handler).post(create_shopping_item_handler),
        )
        .route("/shopping-list/export", get(export_shopping_list_handler))
        .route(
            "/shopping-list/{id}",
            patch(update_shopping_item_handler).delete(delete_shopping_item_handler),
        );

    let origin = app_state.config.cors_allowed_origin.clone();
    let router = match origin.parse::<HeaderValue>() {
        Ok(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([CONTENT_TYPE, ACCEPT]),
        ),
        Err(e) => {
            warn!("Ignoring CORS origin '{}': {}", origin, e);
            router
        }
    };

    router
        .layer(axum_middleware::from_fn(log_requests))
        .with_state(app_state)
}
