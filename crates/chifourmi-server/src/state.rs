//! Shared application state for the match server.
//!
//! [`AppState`] holds the [`Session`] behind a single mutex. A session
//! pairs the [`MatchCoordinator`] with the connection [`Hub`]. Every
//! client operation, including any round resolution it triggers and
//! every outbound push, runs under that one lock, so no operation ever
//! observes another half-applied.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chifourmi_core::{MatchCoordinator, MatchError};
use chifourmi_types::{ClientEvent, ConnectionId, MatchSnapshot, Player};
use tokio::sync::Mutex;
use tracing::debug;

use crate::hub::{Hub, Inbox};

/// The match together with the connections watching it.
#[derive(Debug, Default)]
pub struct Session {
    /// The one match hosted by this process.
    pub coordinator: MatchCoordinator,
    /// Live connections.
    pub hub: Hub,
}

impl Session {
    /// Create a session with an empty match and no connections.
    pub fn new() -> Self {
        Self {
            coordinator: MatchCoordinator::new(),
            hub: Hub::new(),
        }
    }

    /// Open a connection: assign an id and register its outbound queue.
    pub fn connect(&mut self) -> (ConnectionId, Inbox) {
        let connection = ConnectionId::new();
        let inbox = self.hub.register(connection);
        (connection, inbox)
    }

    /// Decode one text frame and apply it to the match.
    ///
    /// # Errors
    ///
    /// Returns the [`MatchError`] already reported to `connection`;
    /// undecodable frames yield [`MatchError::InvalidPayload`].
    pub fn apply_frame(&mut self, connection: ConnectionId, frame: &str) -> Result<(), MatchError> {
        match serde_json::from_str::<ClientEvent>(frame) {
            Ok(event) => {
                debug!(%connection, event = event.name(), "Client event");
                self.coordinator.handle(connection, event, &mut self.hub)
            }
            Err(e) => self.reject(connection, MatchError::InvalidPayload(e.to_string())),
        }
    }

    /// Report a transport-level rejection to `connection`.
    ///
    /// # Errors
    ///
    /// Always returns `error` back so callers can log it.
    pub fn reject(&mut self, connection: ConnectionId, error: MatchError) -> Result<(), MatchError> {
        MatchCoordinator::reject(connection, &error, &mut self.hub);
        Err(error)
    }

    /// Close a connection: leave the match if seated, then unregister.
    pub fn disconnect(&mut self, connection: ConnectionId) -> Option<Player> {
        let player = self.coordinator.disconnect(connection, &mut self.hub);
        self.hub.unregister(connection);
        player
    }
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug)]
pub struct AppState {
    /// The match session, guarded as a whole.
    pub session: Arc<Mutex<Session>>,
    /// When the server started, for `/health`.
    started_at: Instant,
}

impl AppState {
    /// Create application state with an empty match.
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            started_at: Instant::now(),
        }
    }

    /// Time since the server started.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Current match snapshot.
    pub async fn snapshot(&self) -> MatchSnapshot {
        self.session.lock().await.coordinator.snapshot()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
