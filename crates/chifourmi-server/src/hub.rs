//! Registry of live `WebSocket` connections.
//!
//! Each connection owns a bounded queue drained by its writer task.
//! The [`Hub`] implements [`EventSink`] on top of those queues, so the
//! coordinator's `send_to` and `broadcast` turn into non-blocking pushes
//! made while the session lock is held. Every connection therefore sees
//! events in exactly the order the coordinator emitted them.
//!
//! A connection whose queue is full has stopped reading. It is dropped
//! from the hub: its writer drains what is queued, then ends, and the
//! connection is closed.

use std::collections::BTreeMap;

use chifourmi_core::EventSink;
use chifourmi_types::{ConnectionId, ServerEvent};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

/// Events a connection may have queued before it is dropped as too slow.
pub const OUTBOUND_CAPACITY: usize = 256;

/// Sending half of a connection's outbound queue.
pub type Outbound = mpsc::Sender<ServerEvent>;

/// Receiving half of a connection's outbound queue.
pub type Inbox = mpsc::Receiver<ServerEvent>;

/// Live connections keyed by id. Ids are time-ordered, so iteration
/// follows connection order.
#[derive(Debug)]
pub struct Hub {
    connections: BTreeMap<ConnectionId, Outbound>,
    capacity: usize,
}

impl Hub {
    /// Create an empty hub with the default queue size.
    pub const fn new() -> Self {
        Self::with_capacity(OUTBOUND_CAPACITY)
    }

    /// Create an empty hub whose queues hold `capacity` events (at
    /// least one).
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            connections: BTreeMap::new(),
            capacity: if capacity == 0 { 1 } else { capacity },
        }
    }

    /// Register a new connection and return the queue its writer drains.
    pub fn register(&mut self, connection: ConnectionId) -> Inbox {
        let (tx, rx) = mpsc::channel(self.capacity);
        self.connections.insert(connection, tx);
        debug!(%connection, live = self.connections.len(), "Connection registered");
        rx
    }

    /// Forget a connection. Dropping its sender ends the writer task.
    pub fn unregister(&mut self, connection: ConnectionId) -> bool {
        let removed = self.connections.remove(&connection).is_some();
        debug!(%connection, live = self.connections.len(), "Connection unregistered");
        removed
    }

    /// Number of live connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Whether no connection is registered.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Queue `event` on `tx`. Returns `false` when the queue is full.
    fn push(connection: ConnectionId, tx: &Outbound, event: &ServerEvent) -> bool {
        match tx.try_send(event.clone()) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => false,
            Err(TrySendError::Closed(_)) => {
                debug!(%connection, event = event.name(), "Connection queue closed");
                true
            }
        }
    }

    fn drop_slow(&mut self, connection: ConnectionId, event: &ServerEvent) {
        warn!(%connection, event = event.name(), "Outbound queue full, dropping connection");
        self.connections.remove(&connection);
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for Hub {
    fn send_to(&mut self, connection: ConnectionId, event: &ServerEvent) {
        let Some(tx) = self.connections.get(&connection) else {
            debug!(%connection, event = event.name(), "Dropping event for unknown connection");
            return;
        };
        if !Self::push(connection, tx, event) {
            self.drop_slow(connection, event);
        }
    }

    fn broadcast(&mut self, event: &ServerEvent) {
        let slow: Vec<ConnectionId> = self
            .connections
            .iter()
            .filter(|(connection, tx)| !Self::push(**connection, tx, event))
            .map(|(connection, _)| *connection)
            .collect();
        for connection in slow {
            self.drop_slow(connection, event);
        }
    }
}
