use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
};

/// 无状态聊天，不读写任何会话
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Stateless chat request");

    let reply = state
        .gateway
        .chat_once(request.message.as_deref(), request.personality)?;

    Ok(Json(ChatResponse::from(reply)))
}

pub async fn health() -> impl IntoResponse {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: "NEXUS AI Server is running!".to_string(),
    })
}
