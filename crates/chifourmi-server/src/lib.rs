//! Match server for the Chifourmi game.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`WebSocket` endpoint** (`/ws`) where clients join the match,
//!   submit choices, and receive every match event
//! - **REST endpoints** for status (`/`, `/health`) and the display
//!   theme (`/api/theme`)
//!
//! # Architecture
//!
//! The match lives in a [`Session`] behind one mutex inside
//! [`AppState`]. Each `WebSocket` frame is applied while that lock is
//! held, and the resulting events are pushed into per-connection queues
//! owned by the [`Hub`]. A writer task per connection drains its queue
//! to the socket.
//!
//! [`Session`]: state::Session
//! [`Hub`]: hub::Hub

pub mod error;
pub mod handlers;
pub mod hub;
pub mod router;
pub mod server;
pub mod state;
pub mod theme;
pub mod ws;

// Re-export primary types for convenience.
pub use error::ChifourmiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, start_server};
pub use state::{AppState, Session};
