//! Match state machine and round rules for the Chifourmi server.
//!
//! This crate owns the single shared match: slot assignment, choice
//! collection, round resolution, scoring, and the end-of-match verdict.
//! It performs no I/O. Outbound events go through the [`EventSink`]
//! trait, which the server crate implements over its live connections.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `chifourmi-config.yaml` and
//!   the environment.
//! - [`coordinator`] -- [`MatchCoordinator`], the entry point for every
//!   client operation.
//! - [`error`] -- [`MatchError`], the rejections reported to clients.
//! - [`game`] -- [`Match`], the state and its invariants.
//! - [`rules`] -- The beats relation and score comparison.
//! - [`sink`] -- [`EventSink`] and the recording sink.
//!
//! [`MatchCoordinator`]: coordinator::MatchCoordinator
//! [`MatchError`]: error::MatchError
//! [`Match`]: game::Match
//! [`EventSink`]: sink::EventSink

pub mod config;
pub mod coordinator;
pub mod error;
pub mod game;
pub mod rules;
pub mod sink;

pub use coordinator::MatchCoordinator;
pub use error::MatchError;
pub use game::Match;
pub use sink::{EventSink, RecordingSink};
