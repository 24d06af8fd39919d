//! Entity and payload structs for the Chifourmi match.
//!
//! Field names follow the browser protocol (`camelCase`, with the slot
//! carried in a field named `city`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Choice, Slot, Winner};
use crate::ids::ConnectionId;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A connection that has joined the match and holds a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// The connection this player arrived on.
    pub id: ConnectionId,
    /// Display name as typed by the player.
    pub name: String,
    /// The side this player occupies.
    #[serde(rename = "city")]
    pub slot: Slot,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Full, client-safe view of the match.
///
/// Pending choices are reported only as the set of slots that have chosen,
/// never with their values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct MatchSnapshot {
    /// Seated players keyed by connection.
    pub players: BTreeMap<ConnectionId, Player>,
    /// Rounds resolved so far.
    pub current_round: u32,
    /// Rounds in a match.
    pub max_rounds: u32,
    /// Rounds won per slot.
    pub scores: BTreeMap<Slot, u32>,
    /// Whether a round is being resolved.
    pub round_in_progress: bool,
    /// Slots with a recorded choice for the current round.
    pub chosen: Vec<Slot>,
    /// Match winner, once the final round is resolved.
    pub winner: Option<Winner>,
}

// ---------------------------------------------------------------------------
// Round results
// ---------------------------------------------------------------------------

/// A choice revealed after resolution, with the name of whoever made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RevealedChoice {
    /// Name of the player.
    pub player: String,
    /// What they played.
    pub choice: Choice,
}

/// Outcome of a single resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RoundResult {
    /// 1-based round number.
    pub round: u32,
    /// Both revealed choices keyed by slot.
    pub choices: BTreeMap<Slot, RevealedChoice>,
    /// Winning slot, or a tie.
    pub winner: Winner,
    /// Scores after this round was applied.
    pub scores: BTreeMap<Slot, u32>,
}

/// Final outcome broadcast once the last round is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct MatchFinished {
    /// Winning slot, or a tie on equal scores.
    pub winner: Winner,
    /// Scores at the end of the match.
    pub final_scores: BTreeMap<Slot, u32>,
}

// ---------------------------------------------------------------------------
// Request / acknowledgement payloads
// ---------------------------------------------------------------------------

/// Payload of a `joinGame` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct JoinRequest {
    /// Requested display name.
    pub name: String,
    /// Requested side.
    #[serde(rename = "city")]
    pub slot: Slot,
}

/// Acknowledgement sent only to a connection that joined successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct GameJoined {
    /// The id assigned to the joining connection.
    pub player_id: ConnectionId,
    /// The match as it stands after the join.
    pub game_state: MatchSnapshot,
}

/// Notice that a slot has locked in a choice. The value stays hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChoiceMade {
    /// The slot that chose.
    #[serde(rename = "city")]
    pub slot: Slot,
}
