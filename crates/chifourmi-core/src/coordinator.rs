//! The match coordinator: validates client requests, mutates the
//! [`Match`], resolves rounds, and emits events.
//!
//! Every operation runs to completion, including any nested round
//! resolution, before it returns. Callers on a multi-threaded runtime must
//! hold one lock around the coordinator for the whole call so no other
//! operation can observe a half-resolved round.
//!
//! # Event order
//!
//! | Operation | Emitted |
//! |-----------|---------|
//! | join | `playerLeft` (slot switch only), `gameJoined` (requester), `playerJoined`, `gameUpdate` |
//! | choose | `choiceMade`, then on the second choice `roundResult`, `gameFinished` (final round only), `gameUpdate` |
//! | reset | `gameUpdate` |
//! | disconnect | `playerLeft`, `gameUpdate` |
//! | any rejection | `error` (requester) |

use std::collections::BTreeMap;

use chifourmi_types::{
    Choice, ChoiceMade, ClientEvent, ConnectionId, GameJoined, MatchFinished, MatchSnapshot,
    Player, RevealedChoice, RoundResult, ServerEvent, Slot,
};
use tracing::{debug, info};

use crate::error::MatchError;
use crate::game::Match;
use crate::rules;
use crate::sink::EventSink;

/// Owns the match and applies client operations to it.
#[derive(Debug, Clone, Default)]
pub struct MatchCoordinator {
    game: Match,
}

impl MatchCoordinator {
    /// Create a coordinator around an empty match.
    pub fn new() -> Self {
        Self { game: Match::new() }
    }

    /// Read access to the match.
    pub const fn game(&self) -> &Match {
        &self.game
    }

    /// Client-safe view of the match.
    pub fn snapshot(&self) -> MatchSnapshot {
        self.game.snapshot()
    }

    /// Apply a decoded client request.
    ///
    /// # Errors
    ///
    /// Returns the [`MatchError`] already reported to `connection`.
    pub fn handle(
        &mut self,
        connection: ConnectionId,
        event: ClientEvent,
        sink: &mut dyn EventSink,
    ) -> Result<(), MatchError> {
        match event {
            ClientEvent::JoinGame(request) => {
                self.join(connection, &request.name, request.slot, sink)
            }
            ClientEvent::MakeChoice(choice) => self.choose(connection, choice, sink),
            ClientEvent::NewGame => {
                self.reset(sink);
                Ok(())
            }
        }
    }

    // -----------------------------------------------------------------------
    // join
    // -----------------------------------------------------------------------

    /// Seat `connection` in `slot` under `name`.
    ///
    /// A connection already seated elsewhere leaves its old slot first,
    /// which is announced with `playerLeft` and drops its pending choice.
    /// The name is stored verbatim, even when empty.
    ///
    /// # Errors
    ///
    /// [`MatchError::OccupiedSlot`] if any player holds `slot`, the
    /// requester included.
    pub fn join(
        &mut self,
        connection: ConnectionId,
        name: &str,
        slot: Slot,
        sink: &mut dyn EventSink,
    ) -> Result<(), MatchError> {
        if let Some(holder) = self.game.holder_of(slot) {
            let err = MatchError::OccupiedSlot {
                slot,
                holder: holder.name.clone(),
            };
            return Err(Self::rejected(connection, err, sink));
        }

        if let Some(previous) = self.game.unseat(connection) {
            debug!(%connection, from = %previous.slot, to = %slot, "Player switching slot");
            sink.broadcast(&ServerEvent::PlayerLeft(previous));
        }

        let player = Player {
            id: connection,
            name: name.to_owned(),
            slot,
        };
        self.game.seat(player.clone());
        info!(%connection, name = %player.name, %slot, "Player joined");

        sink.send_to(
            connection,
            &ServerEvent::GameJoined(GameJoined {
                player_id: connection,
                game_state: self.game.snapshot(),
            }),
        );
        sink.broadcast(&ServerEvent::PlayerJoined(player));
        self.broadcast_update(sink);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // choose
    // -----------------------------------------------------------------------

    /// Record a choice for `connection` and resolve the round once both
    /// players have chosen. A second choice in the same round replaces
    /// the first.
    ///
    /// # Errors
    ///
    /// Checked in order: [`MatchError::NotJoined`],
    /// [`MatchError::RoundBusy`], [`MatchError::MatchOver`].
    pub fn choose(
        &mut self,
        connection: ConnectionId,
        choice: Choice,
        sink: &mut dyn EventSink,
    ) -> Result<(), MatchError> {
        let Some(slot) = self.game.player(connection).map(|p| p.slot) else {
            return Err(Self::rejected(connection, MatchError::NotJoined, sink));
        };
        if self.game.round_in_progress() {
            return Err(Self::rejected(connection, MatchError::RoundBusy, sink));
        }
        if self.game.is_finished() {
            return Err(Self::rejected(connection, MatchError::MatchOver, sink));
        }

        self.game.record_choice(connection, choice);
        debug!(%connection, %slot, "Choice recorded");
        sink.broadcast(&ServerEvent::ChoiceMade(ChoiceMade { slot }));

        if self.game.ready_to_resolve() {
            self.resolve_round(sink);
        }
        Ok(())
    }

    /// Resolve the current round. Does nothing unless both slots hold a
    /// player with a pending choice.
    fn resolve_round(&mut self, sink: &mut dyn EventSink) {
        let (Some((side_a, choice_a)), Some((side_b, choice_b))) = (
            self.game.seated_choice(Slot::SideA),
            self.game.seated_choice(Slot::SideB),
        ) else {
            return;
        };
        let choices = BTreeMap::from([
            (
                Slot::SideA,
                RevealedChoice {
                    player: side_a.name.clone(),
                    choice: choice_a,
                },
            ),
            (
                Slot::SideB,
                RevealedChoice {
                    player: side_b.name.clone(),
                    choice: choice_b,
                },
            ),
        ]);

        let round = self.game.begin_round();
        let winner = rules::round_winner(choice_a, choice_b);
        if let Some(slot) = winner.slot() {
            self.game.award(slot);
        }
        info!(round, %choice_a, %choice_b, %winner, "Round resolved");

        sink.broadcast(&ServerEvent::RoundResult(RoundResult {
            round,
            choices,
            winner,
            scores: self.game.scores().clone(),
        }));

        if let Some(verdict) = self.game.settle() {
            info!(winner = %verdict, "Match finished");
            sink.broadcast(&ServerEvent::GameFinished(MatchFinished {
                winner: verdict,
                final_scores: self.game.scores().clone(),
            }));
        }

        self.game.finish_round();
        self.broadcast_update(sink);
    }

    // -----------------------------------------------------------------------
    // reset / disconnect
    // -----------------------------------------------------------------------

    /// Start a new match with the same players. Any connection may ask.
    pub fn reset(&mut self, sink: &mut dyn EventSink) {
        self.game.reset();
        info!(players = self.game.players().len(), "Match reset");
        self.broadcast_update(sink);
    }

    /// Drop a closed connection. Returns the player it held, if any.
    ///
    /// The other player's pending choice is kept; the round waits for a
    /// replacement instead of resolving.
    pub fn disconnect(
        &mut self,
        connection: ConnectionId,
        sink: &mut dyn EventSink,
    ) -> Option<Player> {
        let player = self.game.unseat(connection)?;
        info!(%connection, name = %player.name, slot = %player.slot, "Player left");
        sink.broadcast(&ServerEvent::PlayerLeft(player.clone()));
        self.broadcast_update(sink);
        Some(player)
    }

    /// Report an error detected outside the coordinator (for example an
    /// undecodable frame) to `connection`.
    pub fn reject(connection: ConnectionId, error: &MatchError, sink: &mut dyn EventSink) {
        debug!(%connection, %error, "Request rejected");
        sink.send_to(connection, &ServerEvent::Error(error.to_string()));
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn rejected(connection: ConnectionId, error: MatchError, sink: &mut dyn EventSink) -> MatchError {
        Self::reject(connection, &error, sink);
        error
    }

    fn broadcast_update(&self, sink: &mut dyn EventSink) {
        sink.broadcast(&ServerEvent::GameUpdate(self.game.snapshot()));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use chifourmi_types::Winner;

    use super::*;
    use crate::rules::MAX_ROUNDS;
    use crate::sink::{RecordingSink, Target};

    struct Table {
        coordinator: MatchCoordinator,
        sink: RecordingSink,
        alice: ConnectionId,
        bob: ConnectionId,
    }

    /// Alice in side A, Bob in side B, recorder cleared.
    fn seated_table() -> Table {
        let mut coordinator = MatchCoordinator::new();
        let mut sink = RecordingSink::new();
        let alice = ConnectionId::new();
        let bob = ConnectionId::new();
        coordinator.join(alice, "Alice", Slot::SideA, &mut sink).unwrap();
        coordinator.join(bob, "Bob", Slot::SideB, &mut sink).unwrap();
        sink.clear();
        Table {
            coordinator,
            sink,
            alice,
            bob,
        }
    }

    fn play(table: &mut Table, a: Choice, b: Choice) {
        table.coordinator.choose(table.alice, a, &mut table.sink).unwrap();
        table.coordinator.choose(table.bob, b, &mut table.sink).unwrap();
    }

    fn round_results(sink: &RecordingSink) -> Vec<RoundResult> {
        sink.broadcasts()
            .into_iter()
            .filter_map(|e| match e {
                ServerEvent::RoundResult(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    // -- join ---------------------------------------------------------------

    #[test]
    fn join_acks_requester_then_broadcasts() {
        let mut coordinator = MatchCoordinator::new();
        let mut sink = RecordingSink::new();
        let alice = ConnectionId::new();

        coordinator.join(alice, "Alice", Slot::SideA, &mut sink).unwrap();

        assert_eq!(sink.names(), vec!["gameJoined", "playerJoined", "gameUpdate"]);
        assert_eq!(sink.dispatches[0].target, Target::Connection(alice));
        match &sink.dispatches[0].event {
            ServerEvent::GameJoined(ack) => {
                assert_eq!(ack.player_id, alice);
                assert_eq!(ack.game_state.players.len(), 1);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(sink.dispatches[1].target, Target::All);
        assert_eq!(coordinator.game().players().len(), 1);
    }

    #[test]
    fn occupied_slot_is_rejected_privately() {
        let mut table = seated_table();
        let carol = ConnectionId::new();

        let err = table
            .coordinator
            .join(carol, "Carol", Slot::SideA, &mut table.sink)
            .unwrap_err();

        assert_eq!(
            err,
            MatchError::OccupiedSlot {
                slot: Slot::SideA,
                holder: String::from("Alice"),
            }
        );
        assert!(table.sink.broadcasts().is_empty());
        let sent = table.sink.sent_to(carol);
        assert_eq!(sent.len(), 1);
        match sent[0] {
            ServerEvent::Error(message) => assert!(message.contains("Alice")),
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(table.coordinator.game().players().len(), 2);
    }

    #[test]
    fn slots_stay_exclusive() {
        let mut table = seated_table();
        for slot in Slot::ALL {
            let _ = table
                .coordinator
                .join(ConnectionId::new(), "Intruder", slot, &mut table.sink);
        }
        let players = table.coordinator.game().players();
        assert_eq!(players.len(), 2);
        for slot in Slot::ALL {
            assert_eq!(players.values().filter(|p| p.slot == slot).count(), 1);
        }
    }

    #[test]
    fn rejoining_own_slot_is_rejected() {
        let mut coordinator = MatchCoordinator::new();
        let mut sink = RecordingSink::new();
        let alice = ConnectionId::new();
        coordinator.join(alice, "Alice", Slot::SideA, &mut sink).unwrap();
        sink.clear();

        let err = coordinator
            .join(alice, "Mallory", Slot::SideA, &mut sink)
            .unwrap_err();
        assert_eq!(
            err,
            MatchError::OccupiedSlot {
                slot: Slot::SideA,
                holder: String::from("Alice"),
            }
        );
        assert_eq!(sink.names(), vec!["error"]);
        assert!(sink.broadcasts().is_empty());
        assert_eq!(
            coordinator.game().holder_of(Slot::SideA).map(|p| p.name.as_str()),
            Some("Alice")
        );
    }

    #[test]
    fn switching_slot_announces_the_departure() {
        let mut coordinator = MatchCoordinator::new();
        let mut sink = RecordingSink::new();
        let alice = ConnectionId::new();
        coordinator.join(alice, "Alice", Slot::SideA, &mut sink).unwrap();
        coordinator.choose(alice, Choice::Rock, &mut sink).unwrap();
        sink.clear();

        coordinator.join(alice, "Alice", Slot::SideB, &mut sink).unwrap();

        assert_eq!(
            sink.names(),
            vec!["playerLeft", "gameJoined", "playerJoined", "gameUpdate"]
        );
        match sink.broadcasts()[0] {
            ServerEvent::PlayerLeft(p) => assert_eq!(p.slot, Slot::SideA),
            other => panic!("expected playerLeft, got {other:?}"),
        }
        match sink.broadcasts().last() {
            Some(ServerEvent::GameUpdate(snapshot)) => {
                assert_eq!(snapshot.players.len(), 1);
                assert!(snapshot.chosen.is_empty());
            }
            other => panic!("expected gameUpdate, got {other:?}"),
        }
        assert_eq!(coordinator.game().holder_of(Slot::SideA), None);
        assert_eq!(
            coordinator.game().holder_of(Slot::SideB).map(|p| p.id),
            Some(alice)
        );
        assert_eq!(coordinator.game().choice_of(alice), None);
    }

    #[test]
    fn empty_name_is_tolerated() {
        let mut coordinator = MatchCoordinator::new();
        let mut sink = RecordingSink::new();
        let anon = ConnectionId::new();
        coordinator.join(anon, "", Slot::SideB, &mut sink).unwrap();
        assert_eq!(coordinator.game().player(anon).map(|p| p.name.as_str()), Some(""));
    }

    #[test]
    fn names_are_stored_verbatim() {
        let mut coordinator = MatchCoordinator::new();
        let mut sink = RecordingSink::new();
        let alice = ConnectionId::new();
        coordinator.join(alice, "  Alice ", Slot::SideA, &mut sink).unwrap();
        assert_eq!(
            coordinator.game().player(alice).map(|p| p.name.as_str()),
            Some("  Alice ")
        );
    }

    // -- choose -------------------------------------------------------------

    #[test]
    fn choice_from_stranger_is_not_joined() {
        let mut table = seated_table();
        let stranger = ConnectionId::new();
        let err = table
            .coordinator
            .choose(stranger, Choice::Rock, &mut table.sink)
            .unwrap_err();
        assert_eq!(err, MatchError::NotJoined);
        assert_eq!(table.sink.names(), vec!["error"]);
        assert_eq!(table.sink.sent_to(stranger).len(), 1);
    }

    #[test]
    fn choice_made_hides_the_value() {
        let mut table = seated_table();
        table
            .coordinator
            .choose(table.alice, Choice::Paper, &mut table.sink)
            .unwrap();

        assert_eq!(
            table.sink.broadcasts(),
            vec![&ServerEvent::ChoiceMade(ChoiceMade { slot: Slot::SideA })]
        );
        let json = serde_json::to_string(&table.sink.dispatches[0].event).unwrap();
        assert!(!json.contains("papier"));
        assert_eq!(table.coordinator.game().current_round(), 0);
    }

    #[test]
    fn repeated_choice_overwrites() {
        let mut table = seated_table();
        let alice = table.alice;
        table.coordinator.choose(alice, Choice::Rock, &mut table.sink).unwrap();
        table.coordinator.choose(alice, Choice::Paper, &mut table.sink).unwrap();
        assert_eq!(table.coordinator.game().choice_of(alice), Some(Choice::Paper));
        assert!(round_results(&table.sink).is_empty());

        table
            .coordinator
            .choose(table.bob, Choice::Rock, &mut table.sink)
            .unwrap();
        let results = round_results(&table.sink);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].winner, Winner::SideA);
    }

    #[test]
    fn single_player_never_resolves() {
        let mut coordinator = MatchCoordinator::new();
        let mut sink = RecordingSink::new();
        let alice = ConnectionId::new();
        coordinator.join(alice, "Alice", Slot::SideA, &mut sink).unwrap();
        coordinator.choose(alice, Choice::Rock, &mut sink).unwrap();
        coordinator.choose(alice, Choice::Paper, &mut sink).unwrap();
        assert!(round_results(&sink).is_empty());
        assert_eq!(coordinator.game().current_round(), 0);
    }

    // -- resolution ---------------------------------------------------------

    #[test]
    fn round_resolution_event_order() {
        let mut table = seated_table();
        play(&mut table, Choice::Rock, Choice::Scissors);
        assert_eq!(
            table.sink.names(),
            vec!["choiceMade", "choiceMade", "roundResult", "gameUpdate"]
        );

        let result = &round_results(&table.sink)[0];
        assert_eq!(result.round, 1);
        assert_eq!(result.winner, Winner::SideA);
        assert_eq!(result.scores, BTreeMap::from([(Slot::SideA, 1), (Slot::SideB, 0)]));
        assert_eq!(result.choices[&Slot::SideA].player, "Alice");
        assert_eq!(result.choices[&Slot::SideA].choice, Choice::Rock);
        assert_eq!(result.choices[&Slot::SideB].choice, Choice::Scissors);

        let game = table.coordinator.game();
        assert_eq!(game.choice_of(table.alice), None);
        assert!(!game.round_in_progress());
    }

    #[test]
    fn same_choice_is_a_tie_without_points() {
        let mut table = seated_table();
        play(&mut table, Choice::Paper, Choice::Paper);

        let result = &round_results(&table.sink)[0];
        assert_eq!(result.winner, Winner::Tie);
        assert_eq!(result.scores, BTreeMap::from([(Slot::SideA, 0), (Slot::SideB, 0)]));
        assert_eq!(table.coordinator.game().current_round(), 1);
    }

    #[test]
    fn resolution_follows_slots_not_join_order() {
        let mut coordinator = MatchCoordinator::new();
        let mut sink = RecordingSink::new();
        let bob = ConnectionId::new();
        let alice = ConnectionId::new();
        coordinator.join(bob, "Bob", Slot::SideB, &mut sink).unwrap();
        coordinator.join(alice, "Alice", Slot::SideA, &mut sink).unwrap();

        coordinator.choose(bob, Choice::Paper, &mut sink).unwrap();
        coordinator.choose(alice, Choice::Rock, &mut sink).unwrap();

        let result = &round_results(&sink)[0];
        assert_eq!(result.winner, Winner::SideB);
        assert_eq!(result.choices[&Slot::SideB].player, "Bob");
    }

    #[test]
    fn three_straight_wins_finish_the_match() {
        let mut table = seated_table();
        for _ in 0..MAX_ROUNDS {
            play(&mut table, Choice::Rock, Choice::Scissors);
        }

        assert_eq!(round_results(&table.sink).len(), 3);
        let finished: Vec<&ServerEvent> = table
            .sink
            .broadcasts()
            .into_iter()
            .filter(|e| matches!(e, ServerEvent::GameFinished(_)))
            .collect();
        assert_eq!(
            finished,
            vec![&ServerEvent::GameFinished(MatchFinished {
                winner: Winner::SideA,
                final_scores: BTreeMap::from([(Slot::SideA, 3), (Slot::SideB, 0)]),
            })]
        );
        assert!(
            table
                .sink
                .names()
                .ends_with(&["roundResult", "gameFinished", "gameUpdate"])
        );
        assert_eq!(table.coordinator.game().winner(), Some(Winner::SideA));
        assert_eq!(table.coordinator.game().current_round(), MAX_ROUNDS);
    }

    #[test]
    fn equal_scores_after_final_round_tie_the_match() {
        let mut table = seated_table();
        play(&mut table, Choice::Rock, Choice::Scissors);
        play(&mut table, Choice::Rock, Choice::Paper);
        play(&mut table, Choice::Scissors, Choice::Scissors);

        assert_eq!(table.coordinator.game().winner(), Some(Winner::Tie));
    }

    #[test]
    fn choices_after_the_match_are_rejected() {
        let mut table = seated_table();
        for _ in 0..MAX_ROUNDS {
            play(&mut table, Choice::Paper, Choice::Rock);
        }
        table.sink.clear();

        let err = table
            .coordinator
            .choose(table.alice, Choice::Rock, &mut table.sink)
            .unwrap_err();
        assert_eq!(err, MatchError::MatchOver);
        assert!(table.sink.broadcasts().is_empty());
        assert_eq!(table.coordinator.game().current_round(), MAX_ROUNDS);
    }

    #[test]
    fn choice_during_resolution_is_round_busy() {
        let mut table = seated_table();
        table.coordinator.game.begin_round();

        let err = table
            .coordinator
            .choose(table.alice, Choice::Rock, &mut table.sink)
            .unwrap_err();
        assert_eq!(err, MatchError::RoundBusy);
        assert_eq!(table.sink.sent_to(table.alice).len(), 1);
        assert_eq!(table.coordinator.game().choice_of(table.alice), None);
    }

    // -- reset --------------------------------------------------------------

    #[test]
    fn reset_restores_initial_state_and_keeps_players() {
        let mut table = seated_table();
        for _ in 0..MAX_ROUNDS {
            play(&mut table, Choice::Rock, Choice::Scissors);
        }
        table
            .coordinator
            .choose(table.alice, Choice::Rock, &mut table.sink)
            .unwrap_err();
        table.sink.clear();

        let before = table.coordinator.game().players().clone();
        table
            .coordinator
            .handle(ConnectionId::new(), ClientEvent::NewGame, &mut table.sink)
            .unwrap();

        let game = table.coordinator.game();
        assert_eq!(game.current_round(), 0);
        assert_eq!(game.winner(), None);
        assert!(!game.round_in_progress());
        assert_eq!(game.scores(), &BTreeMap::from([(Slot::SideA, 0), (Slot::SideB, 0)]));
        assert_eq!(game.players(), &before);
        assert_eq!(table.sink.names(), vec!["gameUpdate"]);

        play(&mut table, Choice::Scissors, Choice::Rock);
        assert_eq!(table.coordinator.game().current_round(), 1);
    }

    // -- disconnect ---------------------------------------------------------

    #[test]
    fn disconnect_removes_only_the_leaver() {
        let mut table = seated_table();
        play(&mut table, Choice::Rock, Choice::Scissors);
        table
            .coordinator
            .choose(table.alice, Choice::Paper, &mut table.sink)
            .unwrap();
        table
            .coordinator
            .choose(table.bob, Choice::Paper, &mut table.sink)
            .unwrap();
        table
            .coordinator
            .choose(table.alice, Choice::Rock, &mut table.sink)
            .unwrap();
        table.sink.clear();

        let left = table.coordinator.disconnect(table.bob, &mut table.sink);
        assert_eq!(left.map(|p| p.name), Some(String::from("Bob")));
        assert_eq!(table.sink.names(), vec!["playerLeft", "gameUpdate"]);

        let game = table.coordinator.game();
        assert_eq!(game.players().len(), 1);
        assert_eq!(game.choice_of(table.alice), Some(Choice::Rock));
        assert_eq!(game.scores().get(&Slot::SideA), Some(&1));
    }

    #[test]
    fn pending_choice_waits_for_replacement() {
        let mut table = seated_table();
        table
            .coordinator
            .choose(table.alice, Choice::Rock, &mut table.sink)
            .unwrap();
        table.coordinator.disconnect(table.bob, &mut table.sink);

        let carol = ConnectionId::new();
        table
            .coordinator
            .join(carol, "Carol", Slot::SideB, &mut table.sink)
            .unwrap();
        assert!(round_results(&table.sink).is_empty());

        table.coordinator.choose(carol, Choice::Scissors, &mut table.sink).unwrap();
        let results = round_results(&table.sink);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].winner, Winner::SideA);
        assert_eq!(results[0].choices[&Slot::SideB].player, "Carol");
    }

    #[test]
    fn disconnect_of_spectator_is_silent() {
        let mut table = seated_table();
        assert_eq!(table.coordinator.disconnect(ConnectionId::new(), &mut table.sink), None);
        assert!(table.sink.dispatches.is_empty());
    }

    #[test]
    fn reject_reports_invalid_payload() {
        let table = seated_table();
        let mut sink = RecordingSink::new();
        let err = MatchError::InvalidPayload(String::from("expected value"));
        MatchCoordinator::reject(table.alice, &err, &mut sink);
        assert_eq!(
            sink.sent_to(table.alice),
            vec![&ServerEvent::Error(String::from("invalid payload: expected value"))]
        );
    }
}
