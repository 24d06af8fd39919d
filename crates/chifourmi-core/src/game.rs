//! The single shared match and its invariants.
//!
//! [`Match`] is pure state: it knows nothing about events or transports.
//! The [`MatchCoordinator`](crate::coordinator::MatchCoordinator) drives
//! it and decides what to broadcast.
//!
//! # Invariants
//!
//! - At most one player per [`Slot`], so at most two players.
//! - `current_round <= MAX_ROUNDS`.
//! - `scores` always holds both slots.
//! - `winner` is set only after the final round, and only `reset` clears it.

use std::collections::BTreeMap;

use chifourmi_types::{Choice, ConnectionId, MatchSnapshot, Player, Slot, Winner};

use crate::rules::{self, MAX_ROUNDS};

/// Mutable state of the one match this process hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    players: BTreeMap<ConnectionId, Player>,
    current_round: u32,
    scores: BTreeMap<Slot, u32>,
    round_in_progress: bool,
    choices: BTreeMap<ConnectionId, Choice>,
    winner: Option<Winner>,
}

impl Match {
    /// Create an empty match: no players, zero scores.
    pub fn new() -> Self {
        Self {
            players: BTreeMap::new(),
            current_round: 0,
            scores: zero_scores(),
            round_in_progress: false,
            choices: BTreeMap::new(),
            winner: None,
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Seated players keyed by connection.
    pub const fn players(&self) -> &BTreeMap<ConnectionId, Player> {
        &self.players
    }

    /// The player on a connection, if it has joined.
    pub fn player(&self, connection: ConnectionId) -> Option<&Player> {
        self.players.get(&connection)
    }

    /// The player holding `slot`, if any.
    pub fn holder_of(&self, slot: Slot) -> Option<&Player> {
        self.players.values().find(|p| p.slot == slot)
    }

    /// Rounds resolved so far.
    pub const fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Rounds won per slot.
    pub const fn scores(&self) -> &BTreeMap<Slot, u32> {
        &self.scores
    }

    /// Whether a round is being resolved right now.
    pub const fn round_in_progress(&self) -> bool {
        self.round_in_progress
    }

    /// Match winner, once decided.
    pub const fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Whether the final round has been resolved.
    pub const fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// The pending choice of a connection.
    pub fn choice_of(&self, connection: ConnectionId) -> Option<Choice> {
        self.choices.get(&connection).copied()
    }

    /// The player in `slot` together with their pending choice.
    pub fn seated_choice(&self, slot: Slot) -> Option<(&Player, Choice)> {
        let player = self.holder_of(slot)?;
        let choice = self.choice_of(player.id)?;
        Some((player, choice))
    }

    /// Whether both seated players have a pending choice.
    pub fn ready_to_resolve(&self) -> bool {
        self.players.len() == Slot::ALL.len()
            && self
                .players
                .keys()
                .all(|id| self.choices.contains_key(id))
    }

    /// Client-safe view of the match. Choice values are not included.
    pub fn snapshot(&self) -> MatchSnapshot {
        let chosen = Slot::ALL
            .into_iter()
            .filter(|slot| self.seated_choice(*slot).is_some())
            .collect();
        MatchSnapshot {
            players: self.players.clone(),
            current_round: self.current_round,
            max_rounds: MAX_ROUNDS,
            scores: self.scores.clone(),
            round_in_progress: self.round_in_progress,
            chosen,
            winner: self.winner,
        }
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert or replace the player on `player.id`.
    ///
    /// The caller is responsible for checking slot exclusivity.
    pub fn seat(&mut self, player: Player) {
        self.players.insert(player.id, player);
    }

    /// Remove a player and their pending choice.
    pub fn unseat(&mut self, connection: ConnectionId) -> Option<Player> {
        self.choices.remove(&connection);
        self.players.remove(&connection)
    }

    /// Record (or overwrite) the pending choice of a connection.
    pub fn record_choice(&mut self, connection: ConnectionId, choice: Choice) {
        self.choices.insert(connection, choice);
    }

    /// Mark resolution as started and advance the round counter.
    /// Returns the new round number.
    pub fn begin_round(&mut self) -> u32 {
        self.round_in_progress = true;
        self.current_round = self.current_round.saturating_add(1).min(MAX_ROUNDS);
        self.current_round
    }

    /// Credit one round win to `slot`.
    pub fn award(&mut self, slot: Slot) {
        let score = self.scores.entry(slot).or_insert(0);
        *score = score.saturating_add(1);
    }

    /// Decide the match if the final round has been played.
    pub fn settle(&mut self) -> Option<Winner> {
        if self.current_round >= MAX_ROUNDS {
            self.winner = Some(rules::final_verdict(&self.scores));
        }
        self.winner
    }

    /// Clear choices and the in-progress flag after resolution.
    pub fn finish_round(&mut self) {
        self.choices.clear();
        self.round_in_progress = false;
    }

    /// Start a fresh match with the same players.
    pub fn reset(&mut self) {
        self.current_round = 0;
        self.choices.clear();
        self.winner = None;
        self.round_in_progress = false;
        self.scores = zero_scores();
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

fn zero_scores() -> BTreeMap<Slot, u32> {
    Slot::ALL.into_iter().map(|slot| (slot, 0)).collect()
}
