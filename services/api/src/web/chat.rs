//! services/api/src/web/chat.rs
//!
//! Handlers for the rule-based chat assistant.

use crate::error::{reject, HandlerError};
use crate::web::{protocol::ChatRequest, state::AppState};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// Send a chat message and get the assistant's reply.
///
/// The response carries the parsed intent and both the user message and the
/// reply; action replies include `actionType` and `actionPayload`.
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Intent plus [user message, reply]"),
        (status = 400, description = "Empty message")
    ),
    tag = "chat"
)]
pub async fn send_chat_message_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let exchange = app_state
        .kitchen
        .send_chat_message(&req.message)
        .await
        .map_err(reject)?;
    Ok(Json(exchange))
}

/// The full chat log, oldest first.
#[utoipa::path(
    get,
    path = "/chat",
    responses((status = 200, description = "All chat messages")),
    tag = "chat"
)]
pub async fn chat_history_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let messages = app_state.kitchen.chat_history().await.map_err(reject)?;
    Ok(Json(messages))
}
