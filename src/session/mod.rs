//! Session orchestration: lifecycle, turn ownership, move log, events.

pub mod game;
pub mod turn;

pub use game::{
    GamePhase, GameSession, MoveOutcome, MoveRecord, Outcome, SessionConfig, SessionEvent,
};
pub use turn::{FirstPlayer, TurnController};
