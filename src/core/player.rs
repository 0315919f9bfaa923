//! Player identity, mark symbols, and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two players, index 0 or 1.
//!
//! ## Symbol
//!
//! Opaque comparable mark token. The engine never interprets it; the
//! presentation layer decides how a symbol is drawn.
//!
//! ## PlayerPair
//!
//! Fixed per-player storage for exactly two entries, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::rng::GameRng;

/// Player identifier for a two-player session.
///
/// Indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID. Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Two-player engine: id must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player of the pair.
    ///
    /// ```
    /// use gridmatch::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).other(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).other(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self((self.0 + 1) % 2)
    }

    /// Both player IDs in order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..2).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Opaque mark token a player claims cells with.
///
/// Any comparable value works; the engine only ever tests symbols for
/// equality and copies them into the move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A configured player: identity plus chosen mark.
///
/// Created at session configuration and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player identity (0 or 1).
    pub id: PlayerId,
    /// Mark this player claims cells with.
    pub symbol: Symbol,
}

impl Player {
    /// Create a player with the given mark.
    #[must_use]
    pub const fn new(id: PlayerId, symbol: Symbol) -> Self {
        Self { id, symbol }
    }
}

/// Per-player data storage for exactly two players.
///
/// ## Example
///
/// ```
/// use gridmatch::core::{PlayerId, PlayerPair};
///
/// let mut wins: PlayerPair<u32> = PlayerPair::new(0, 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(0)], 0);
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from the two entries, player 0 first.
    #[must_use]
    pub const fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a player's entry.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A roster of selectable mark symbols.
///
/// Backs the pre-game symbol pick: each player cycles through the roster,
/// and a pick that would collide with the other player's current symbol is
/// skipped so the two marks stay distinct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRoster {
    symbols: Vec<Symbol>,
}

impl SymbolRoster {
    /// Create a roster. Needs at least three symbols so that cycling can
    /// always skip past the other player's pick.
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        assert!(symbols.len() >= 3, "Roster needs at least 3 symbols");
        Self { symbols }
    }

    /// Number of symbols on offer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the roster is empty. Always false for a constructed roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Pick a uniformly random symbol, used for the initial menu display.
    #[must_use]
    pub fn random(&self, rng: &mut GameRng) -> Symbol {
        self.symbols[rng.gen_range_usize(0..self.symbols.len())]
    }

    /// Advance `current` to the next symbol in the roster, skipping one
    /// extra slot if the advance would land on `taken`.
    ///
    /// Symbols not in the roster cycle from the start.
    #[must_use]
    pub fn next_for(&self, current: Symbol, taken: Symbol) -> Symbol {
        let index = self
            .symbols
            .iter()
            .position(|&s| s == current)
            .unwrap_or(self.symbols.len() - 1);

        let candidate = self.symbols[(index + 1) % self.symbols.len()];
        if candidate == taken {
            self.symbols[(index + 2) % self.symbols.len()]
        } else {
            candidate
        }
    }
}
