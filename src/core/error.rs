//! Error classification for move validation and session lifecycle.
//!
//! Nothing here is fatal: every error is recoverable by submitting a
//! different move or restarting the session. The engine only classifies;
//! user-visible messaging belongs to the presentation layer.

use super::player::PlayerId;

/// Errors surfaced by the board and session APIs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinates fall outside the current grid.
    #[error("position ({row}, {column}) is outside the {size}x{size} grid")]
    InvalidPosition {
        row: usize,
        column: usize,
        size: usize,
    },

    /// The targeted cell already has an occupant.
    #[error("cell ({row}, {column}) is already claimed by {occupant}")]
    AlreadyClaimed {
        row: usize,
        column: usize,
        occupant: PlayerId,
    },

    /// A move was submitted while the session is not accepting moves.
    #[error("session is not active (no game in progress)")]
    SessionNotActive,

    /// The supplied configuration cannot produce a playable session.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}
