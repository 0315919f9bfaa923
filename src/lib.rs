//! # gridmatch
//!
//! A two-player grid-claiming game engine: players alternately claim cells
//! on an N×N board (N ∈ {3, 4}); the engine detects row, column, and
//! diagonal matches as well as draws, and tracks authoritative state through
//! a menu → play → end-game lifecycle.
//!
//! ## Design Principles
//!
//! 1. **Owned, not global**: a [`GameSession`] is an explicitly constructed
//!    value passed to collaborators by reference. No global accessor.
//!
//! 2. **One mutator path**: all board and turn mutation goes through the
//!    session. Collaborators (presentation, scenario runner) only read.
//!
//! 3. **Deterministic**: every random decision flows through a seeded
//!    [`GameRng`], so games and scripted scenarios replay exactly.
//!
//! 4. **Classify, never render**: errors and events describe what happened;
//!    user-visible messaging is the presentation layer's job.
//!
//! ## Modules
//!
//! - `core`: player identity, mark symbols, errors, RNG
//! - `board`: the N×N cell matrix and line-matching engine
//! - `session`: lifecycle orchestration, turn ownership, move log, events
//! - `scenario`: scripted win/draw sequences for automated verification

pub mod board;
pub mod core;
pub mod scenario;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, GameRngState, Player, PlayerId, PlayerPair, Symbol, SymbolRoster,
};

pub use crate::board::{Board, Cell, GridSize, LineTarget};

pub use crate::session::{
    FirstPlayer, GamePhase, GameSession, MoveOutcome, MoveRecord, Outcome, SessionConfig,
    SessionEvent, TurnController,
};

pub use crate::scenario::{DrawSweep, ScenarioReport, ScenarioRunner, ScenarioStatus};
