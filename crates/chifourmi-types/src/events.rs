//! Event envelopes exchanged over the WebSocket.
//!
//! Every frame is a JSON object `{"event": <name>, "data": <payload>}`.
//! [`ClientEvent`] covers what the browser may send, [`ServerEvent`]
//! everything the match server emits.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Choice;
use crate::structs::{
    ChoiceMade, GameJoined, JoinRequest, MatchFinished, MatchSnapshot, Player, RoundResult,
};

/// A request from a browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum ClientEvent {
    /// Occupy a slot under a display name.
    JoinGame(JoinRequest),
    /// Lock in a choice for the current round.
    MakeChoice(Choice),
    /// Reset the match, keeping seated players.
    NewGame,
}

impl ClientEvent {
    /// The wire name of this event.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::JoinGame(_) => "joinGame",
            Self::MakeChoice(_) => "makeChoice",
            Self::NewGame => "newGame",
        }
    }
}

/// An event emitted by the match server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum ServerEvent {
    /// Join acknowledgement, sent to the requester only.
    GameJoined(GameJoined),
    /// Rejection reason, sent to the requester only.
    Error(String),
    /// A player took a slot.
    PlayerJoined(Player),
    /// A player disconnected.
    PlayerLeft(Player),
    /// Full match snapshot.
    GameUpdate(MatchSnapshot),
    /// A slot locked in its choice.
    ChoiceMade(ChoiceMade),
    /// A round was resolved.
    RoundResult(RoundResult),
    /// The final round was resolved.
    GameFinished(MatchFinished),
}

impl ServerEvent {
    /// The wire name of this event.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GameJoined(_) => "gameJoined",
            Self::Error(_) => "error",
            Self::PlayerJoined(_) => "playerJoined",
            Self::PlayerLeft(_) => "playerLeft",
            Self::GameUpdate(_) => "gameUpdate",
            Self::ChoiceMade(_) => "choiceMade",
            Self::RoundResult(_) => "roundResult",
            Self::GameFinished(_) => "gameFinished",
        }
    }
}
