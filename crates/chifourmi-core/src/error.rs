//! Errors raised by match operations.
//!
//! Every variant is recoverable. The coordinator reports it to the
//! requesting connection only, as an `error` event carrying the
//! [`Display`](core::fmt::Display) text, and returns it to the caller.

use chifourmi_types::Slot;

/// A rejected match operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The requested slot is held by another player.
    #[error("slot {slot} is already taken by {holder}")]
    OccupiedSlot {
        /// The contested slot.
        slot: Slot,
        /// Name of the player holding it.
        holder: String,
    },

    /// A choice came from a connection that has not joined.
    #[error("you must join the game first")]
    NotJoined,

    /// A choice arrived while a round was being resolved.
    #[error("round in progress, wait for the result")]
    RoundBusy,

    /// A choice arrived after the final round, before a reset.
    #[error("the match is over, start a new game")]
    MatchOver,

    /// The frame could not be decoded into a request.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
