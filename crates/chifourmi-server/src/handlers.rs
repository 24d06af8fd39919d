//! HTTP endpoint handlers.
//!
//! Every handler reads the match through the shared [`AppState`]; none
//! of them mutates it.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Server banner with timestamp, theme, and player count |
//! | `GET` | `/health` | Liveness, uptime, and full match snapshot |
//! | `GET` | `/api/theme` | Display labels for the seated players |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use chifourmi_types::{MatchSnapshot, Slot};
use serde::Serialize;

use crate::error::ChifourmiError;
use crate::state::AppState;
use crate::theme;

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    /// Fixed banner text.
    pub message: &'static str,
    /// Current time, RFC 3339.
    pub timestamp: String,
    /// Display theme for the seated players.
    pub theme: &'static str,
    /// Number of seated players.
    pub players: usize,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"OK"` while the process serves requests.
    pub status: &'static str,
    /// Whole seconds since startup.
    pub uptime_seconds: u64,
    /// Number of seated players.
    pub players: usize,
    /// Full public match state.
    pub game_state: MatchSnapshot,
}

/// Body of `GET /api/theme`.
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    /// Theme identifier.
    pub name: &'static str,
    /// Display label per slot.
    pub labels: ThemeLabels,
}

/// Display labels keyed by slot wire name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeLabels {
    /// Label shown for `sideA`.
    pub side_a: &'static str,
    /// Label shown for `sideB`.
    pub side_b: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /`
pub async fn index(State(state): State<Arc<AppState>>) -> Json<IndexResponse> {
    let snapshot = state.snapshot().await;
    Json(IndexResponse {
        message: "Chifourmi server is running",
        timestamp: chrono::Utc::now().to_rfc3339(),
        theme: theme::for_players(snapshot.players.values()).name,
        players: snapshot.players.len(),
    })
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let game_state = state.snapshot().await;
    Json(HealthResponse {
        status: "OK",
        uptime_seconds: state.uptime().as_secs(),
        players: game_state.players.len(),
        game_state,
    })
}

/// `GET /api/theme`
pub async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemeResponse> {
    let snapshot = state.snapshot().await;
    let theme = theme::for_players(snapshot.players.values());
    Json(ThemeResponse {
        name: theme.name,
        labels: ThemeLabels {
            side_a: theme.label(Slot::SideA),
            side_b: theme.label(Slot::SideB),
        },
    })
}

/// Fallback for unknown paths.
#[allow(clippy::unused_async)]
pub async fn not_found(uri: Uri) -> ChifourmiError {
    ChifourmiError::NotFound(uri.path().to_owned())
}
