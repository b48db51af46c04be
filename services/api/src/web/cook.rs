//! services/api/src/web/cook.rs
//!
//! Handlers for cook sessions and their timers.
//! Session responses carry each timer's `remainingSeconds`, computed at
//! response time.

use crate::error::{reject, HandlerError};
use crate::web::{
    protocol::{AddTimerRequest, AdvanceStepRequest, StartCookSessionRequest},
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

/// Start cooking a recipe. Any session still in progress is aborted.
#[utoipa::path(
    post,
    path = "/cook-sessions",
    request_body = StartCookSessionRequest,
    responses(
        (status = 201, description = "The new active session"),
        (status = 400, description = "servings is 0"),
        (status = 404, description = "Recipe not found")
    ),
    tag = "cook"
)]
pub async fn start_cook_session_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<StartCookSessionRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let session = app_state
        .kitchen
        .start_cook_session(req.recipe_id, req.servings)
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    get,
    path = "/cook-sessions",
    responses((status = 200, description = "Every session, including finished ones")),
    tag = "cook"
)]
pub async fn list_cook_sessions_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let sessions = app_state.kitchen.list_cook_sessions().await.map_err(reject)?;
    Ok(Json(sessions))
}

/// The session in progress, or `null` when nothing is cooking.
#[utoipa::path(
    get,
    path = "/cook-sessions/active",
    responses((status = 200, description = "The active session or null")),
    tag = "cook"
)]
pub async fn active_cook_session_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let session = app_state.kitchen.active_cook_session().await.map_err(reject)?;
    Ok(Json(session))
}

#[utoipa::path(
    get,
    path = "/cook-sessions/{id}",
    params(("id" = Uuid, Path, description = "Cook session id")),
    responses(
        (status = 200, description = "The session"),
        (status = 404, description = "Cook session not found")
    ),
    tag = "cook"
)]
pub async fn get_cook_session_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HandlerError> {
    let session = app_state.kitchen.get_cook_session(id).await.map_err(reject)?;
    Ok(Json(session))
}

/// Move to another step. Requests past either end are clamped.
#[utoipa::path(
    post,
    path = "/cook-sessions/{id}/step",
    request_body = AdvanceStepRequest,
    params(("id" = Uuid, Path, description = "Cook session id")),
    responses(
        (status = 200, description = "The updated session"),
        (status = 400, description = "Neither or both of stepIndex and delta given"),
        (status = 404, description = "Cook session not found"),
        (status = 409, description = "The session is not active")
    ),
    tag = "cook"
)]
pub async fn advance_step_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<AdvanceStepRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let step_move = req
        .into_step_move()
        .map_err(|msg| (StatusCode::BAD_REQUEST, msg))?;
    let session = app_state
        .kitchen
        .advance_step(id, step_move)
        .await
        .map_err(reject)?;
    Ok(Json(session))
}

#[utoipa::path(
    post,
    path = "/cook-sessions/{id}/end",
    params(("id" = Uuid, Path, description = "Cook session id")),
    responses(
        (status = 200, description = "The completed session"),
        (status = 404, description = "Cook session not found"),
        (status = 409, description = "The session was aborted")
    ),
    tag = "cook"
)]
pub async fn end_cook_session_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HandlerError> {
    let session = app_state.kitchen.end_cook_session(id).await.map_err(reject)?;
    Ok(Json(session))
}

#[utoipa::path(
    post,
    path = "/cook-sessions/{id}/timers",
    request_body = AddTimerRequest,
    params(("id" = Uuid, Path, description = "Cook session id")),
    responses(
        (status = 201, description = "The new timer"),
        (status = 400, description = "Step index outside the recipe"),
        (status = 404, description = "Cook session not found"),
        (status = 409, description = "The session is not active")
    ),
    tag = "cook"
)]
pub async fn add_timer_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddTimerRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let timer = app_state
        .kitchen
        .add_timer(id, req.step_index, &req.label, req.duration_seconds)
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(timer)))
}

#[utoipa::path(
    delete,
    path = "/cook-sessions/{id}/timers/{timer_id}",
    params(
        ("id" = Uuid, Path, description = "Cook session id"),
        ("timer_id" = Uuid, Path, description = "Timer id")
    ),
    responses(
        (status = 204, description = "Timer removed"),
        (status = 404, description = "Cook session or timer not found")
    ),
    tag = "cook"
)]
pub async fn remove_timer_handler(
    State(app_state): State<Arc<AppState>>,
    Path((id, timer_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HandlerError> {
    app_state
        .kitchen
        .remove_timer(id, timer_id)
        .await
        .map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}
