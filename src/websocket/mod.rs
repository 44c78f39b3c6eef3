//! WebSocket Handler Module
//!
//! Real-time chat transport. Each connection owns exactly one session in the
//! gateway: created on upgrade, removed when the socket closes. Frames from a
//! connection are handled one at a time, in arrival order.

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tracing::{debug, error};

use crate::api::app_state::AppState;
use crate::models::event::ServerEvent;

/// WebSocket handler using Axum's WebSocket support
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle the WebSocket connection
async fn handle_socket(ws: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = ws.split();
    let connection_id = uuid::Uuid::new_v4().to_string();
    let gateway = state.gateway.clone();

    let init_events = match gateway.open(&connection_id) {
        Ok(events) => events,
        Err(e) => {
            error!("Failed to open session {}: {}", connection_id, e);
            return;
        }
    };

    if let Err(e) = send_events(&mut sender, &init_events).await {
        error!("Failed to send init event: {}", e);
        gateway.close(&connection_id);
        return;
    }

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let events = gateway.handle_frame(&connection_id, &text);
                if let Err(e) = send_events(&mut sender, &events).await {
                    error!("Failed to send events to {}: {}", connection_id, e);
                    break;
                }
            }
            Ok(Message::Close(_)) => {
                debug!("Client initiated close for {}", connection_id);
                break;
            }
            Ok(_) => {}
            Err(e) => {
                error!("WebSocket error for {}: {}", connection_id, e);
                break;
            }
        }
    }

    gateway.close(&connection_id);
}

/// Serialize events into text frames, preserving order
pub fn encode_events(events: &[ServerEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match serde_json::to_string(event) {
            Ok(text) => Some(text),
            Err(e) => {
                error!("Failed to serialize {} event: {}", event.name(), e);
                None
            }
        })
        .collect()
}

async fn send_events(
    sender: &mut SplitSink<WebSocket, Message>,
    events: &[ServerEvent],
) -> Result<(), axum::Error> {
    for text in encode_events(events) {
        sender.send(Message::Text(text)).await?;
    }
    Ok(())
}
