//! `WebSocket` transport for match clients.
//!
//! Clients connect to `GET /ws` and exchange JSON envelopes of the form
//! `{"event": <name>, "data": <payload>}`. Each connection runs two
//! halves:
//!
//! - a reader loop that decodes inbound frames and applies them to the
//!   [`Session`](crate::state::Session) under its lock;
//! - a writer task that drains the connection's [`Inbox`] into text
//!   frames.
//!
//! When either half stops, the connection leaves the match and is
//! removed from the hub. A client that stops reading is cut off: each
//! socket write is bounded by [`SEND_TIMEOUT`], and the final drain after
//! disconnect by [`DRAIN_TIMEOUT`]. Pings are answered by the protocol
//! layer.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use chifourmi_core::MatchError;
use chifourmi_types::ConnectionId;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::hub::Inbox;
use crate::state::AppState;

/// Longest a single frame write may take before the client is dropped.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest the writer may keep flushing after the connection left.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Upgrade an HTTP request to a match connection.
///
/// # Route
///
/// `GET /ws`
pub async fn ws_match(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_ws(socket, state))
}

/// Run one connection from registration to disconnect.
async fn handle_ws(socket: WebSocket, state: Arc<AppState>) {
    let (connection, inbox) = state.session.lock().await.connect();
    info!(%connection, "WebSocket client connected");

    let (sink, mut stream) = socket.split();
    let mut writer = tokio::spawn(write_events(sink, inbox, connection));

    let writer_done = loop {
        tokio::select! {
            frame = stream.next() => {
                let error = match frame {
                    Some(Ok(Message::Text(text))) => {
                        state.session.lock().await.apply_frame(connection, text.as_str()).err()
                    }
                    Some(Ok(Message::Binary(_))) => {
                        let error = MatchError::InvalidPayload(String::from("binary frames are not supported"));
                        state.session.lock().await.reject(connection, error).err()
                    }
                    Some(Ok(Message::Ping(_) | Message::Pong(_))) => None,
                    Some(Ok(Message::Close(_))) | None => {
                        debug!(%connection, "WebSocket client closed");
                        break false;
                    }
                    Some(Err(e)) => {
                        debug!(%connection, "WebSocket error: {e}");
                        break false;
                    }
                };
                if let Some(error) = error {
                    debug!(%connection, %error, "Request rejected");
                }
            }
            _ = &mut writer => {
                debug!(%connection, "WebSocket writer stopped");
                break true;
            }
        }
    };

    let left = state.session.lock().await.disconnect(connection);
    info!(
        %connection,
        player = left.as_ref().map(|p| p.name.as_str()),
        "WebSocket client disconnected"
    );

    // Unregistering dropped the sender, so the writer flushes and ends.
    if !writer_done {
        match timeout(DRAIN_TIMEOUT, &mut writer).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(%connection, "WebSocket writer task failed: {e}"),
            Err(_) => {
                debug!(%connection, "WebSocket writer did not drain in time");
                writer.abort();
            }
        }
    }
}

/// Forward queued events to the socket until the queue closes, a send
/// fails, or a send outlasts [`SEND_TIMEOUT`].
async fn write_events(
    mut sink: SplitSink<WebSocket, Message>,
    mut inbox: Inbox,
    connection: ConnectionId,
) {
    while let Some(event) = inbox.recv().await {
        let json = match serde_json::to_string(&event) {
            Ok(j) => j,
            Err(e) => {
                warn!(%connection, event = event.name(), "Failed to serialize event: {e}");
                continue;
            }
        };
        match timeout(SEND_TIMEOUT, sink.send(Message::Text(json.into()))).await {
            Ok(Ok(())) => {}
            Ok(Err(_)) => {
                debug!(%connection, "WebSocket client disconnected (send failed)");
                return;
            }
            Err(_) => {
                warn!(%connection, "WebSocket client stopped reading, dropping");
                return;
            }
        }
    }
    if let Err(e) = sink.close().await {
        debug!(%connection, "WebSocket close failed: {e}");
    }
}
