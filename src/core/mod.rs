//! Core engine types: players, symbols, errors, RNG.
//!
//! This module contains the fundamental building blocks shared by the board,
//! the session, and the scenario runner.

pub mod error;
pub mod player;
pub mod rng;

pub use error::GameError;
pub use player::{Player, PlayerId, PlayerPair, Symbol, SymbolRoster};
pub use rng::{GameRng, GameRngState};
