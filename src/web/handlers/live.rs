//! WebSocket feed behind the dashboard's task list.
//!
//! One connection holds one [`TaskSubscription`](crate::libs::live::TaskSubscription).
//! Whatever ends the loop (client close, send failure, store error) drops
//! the subscription with it.

use crate::libs::messages::Message;
use crate::web::extract::RequireSession;
use crate::web::pages;
use crate::web::server::AppState;
use axum::extract::ws::{self, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum LiveMessage {
    /// Full replacement for the `#tasks` element.
    #[serde(rename = "snapshot")]
    Snapshot { count: usize, html: String },
}

pub async fn handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    RequireSession(identity): RequireSession,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state, identity.email))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, owner: String) {
    let mut subscription = state.store.subscribe_own_tasks(&owner);
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            snapshot = subscription.next() => {
                let tasks = match snapshot {
                    Some(Ok(tasks)) => tasks,
                    Some(Err(e)) => {
                        tracing::error!("{}", e);
                        break;
                    }
                    None => break,
                };

                let message = LiveMessage::Snapshot {
                    count: tasks.len(),
                    html: pages::task_list(&tasks, &state.base_url, &state.date_format),
                };
                let Ok(text) = serde_json::to_string(&message) else {
                    break;
                };
                if let Err(e) = sender.send(ws::Message::Text(text.into())).await {
                    tracing::debug!("{}", Message::LiveSendFailed(e.to_string()));
                    break;
                }
            }
            incoming = receiver.next() => match incoming {
                Some(Ok(ws::Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }
}
