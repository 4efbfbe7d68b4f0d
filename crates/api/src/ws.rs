//! WebSocket stream of staleness events.
//!
//! Connected dashboard clients receive one JSON message per confirmed
//! mutation and respond by refetching the named entity list. The stream
//! is broadcast-only; inbound messages are ignored apart from close
//! frames.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use crate::state::AppState;

/// HTTP handler that upgrades the connection to WebSocket.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Forward bus events to a single connection until it closes.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let mut rx = state.event_bus.subscribe();
    let (mut sink, mut stream) = socket.split();
    tracing::debug!("Staleness WebSocket connected");

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Ok(event) => {
                    let payload = match serde_json::to_string(&event) {
                        Ok(payload) => payload,
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to serialize staleness event");
                            continue;
                        }
                    };
                    if sink.send(Message::Text(payload.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    // The client missed events; it will refetch on the
                    // next one it does receive.
                    tracing::debug!(skipped, "Staleness subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            },
            inbound = stream.next() => match inbound {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::debug!(error = %e, "WebSocket receive error");
                    break;
                }
            },
        }
    }

    tracing::debug!("Staleness WebSocket disconnected");
}
