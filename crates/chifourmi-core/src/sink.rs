//! Outbound event seam between the coordinator and the transport.
//!
//! The coordinator never touches sockets. It pushes every event through an
//! [`EventSink`], which the server implements over its connection registry
//! and tests implement with [`RecordingSink`].

use chifourmi_types::{ConnectionId, ServerEvent};

/// Destination of outbound events.
///
/// Implementations must deliver events to each connection in the order
/// they are pushed.
pub trait EventSink {
    /// Deliver an event to a single connection.
    fn send_to(&mut self, connection: ConnectionId, event: &ServerEvent);

    /// Deliver an event to every connection.
    fn broadcast(&mut self, event: &ServerEvent);
}

/// Who an event was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A single connection.
    Connection(ConnectionId),
    /// Every connection.
    All,
}

/// One recorded delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Where the event went.
    pub target: Target,
    /// The event itself.
    pub event: ServerEvent,
}

/// Sink that keeps every dispatch in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Deliveries, oldest first.
    pub dispatches: Vec<Dispatch>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub const fn new() -> Self {
        Self {
            dispatches: Vec::new(),
        }
    }

    /// Wire names of every recorded event, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.dispatches.iter().map(|d| d.event.name()).collect()
    }

    /// Events only the given connection received, in order.
    pub fn sent_to(&self, connection: ConnectionId) -> Vec<&ServerEvent> {
        self.dispatches
            .iter()
            .filter(|d| d.target == Target::Connection(connection))
            .map(|d| &d.event)
            .collect()
    }

    /// Broadcast events, in order.
    pub fn broadcasts(&self) -> Vec<&ServerEvent> {
        self.dispatches
            .iter()
            .filter(|d| d.target == Target::All)
            .map(|d| &d.event)
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.dispatches.clear();
    }
}

impl EventSink for RecordingSink {
    fn send_to(&mut self, connection: ConnectionId, event: &ServerEvent) {
        self.dispatches.push(Dispatch {
            target: Target::Connection(connection),
            event: event.clone(),
        });
    }

    fn broadcast(&mut self, event: &ServerEvent) {
        self.dispatches.push(Dispatch {
            target: Target::All,
            event: event.clone(),
        });
    }
}
