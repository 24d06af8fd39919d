//! Shared type definitions for the Chifourmi match server.
//!
//! This crate is the single source of truth for every type that crosses
//! the WebSocket. Types flow downstream to `TypeScript` via `ts-rs` for the
//! browser client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe connection identifier
//! - [`enums`] -- Slots, choices, and winners
//! - [`structs`] -- Players, snapshots, round results, and payloads
//! - [`events`] -- Client and server event envelopes

pub mod enums;
pub mod events;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Choice, Slot, Winner};
pub use events::{ClientEvent, ServerEvent};
pub use ids::ConnectionId;
pub use structs::{
    ChoiceMade, GameJoined, JoinRequest, MatchFinished, MatchSnapshot, Player, RevealedChoice,
    RoundResult,
};
