//! The play board: an N×N matrix of cells with match and draw detection.
//!
//! ## GridSize
//!
//! Board dimension validated to {3, 4}. Any other requested value is coerced
//! to 3 rather than rejected, matching the tolerant validation of the rest of
//! the configuration surface.
//!
//! ## Board
//!
//! Owns all cells exclusively. Cells hold a non-owning `PlayerId` as the
//! occupant back-reference; a cell goes from empty to occupied exactly once
//! and only a full `reset` reverts it.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

use super::line::LineTarget;

/// Validated board dimension.
///
/// ```
/// use gridmatch::board::GridSize;
///
/// assert_eq!(GridSize::new(4).get(), 4);
/// // Out-of-range sizes coerce to the default
/// assert_eq!(GridSize::new(7).get(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize(usize);

impl GridSize {
    /// Smallest supported board.
    pub const MIN: usize = 3;
    /// Largest supported board.
    pub const MAX: usize = 4;

    /// Validate a requested size, coercing anything outside {3, 4} to 3.
    #[must_use]
    pub const fn new(requested: usize) -> Self {
        if requested >= Self::MIN && requested <= Self::MAX {
            Self(requested)
        } else {
            Self(Self::MIN)
        }
    }

    /// The board dimension.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Total number of cells on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// One board cell. Holds the claiming player, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The player who claimed this cell, or `None` while unclaimed.
    pub occupant: Option<PlayerId>,
}

/// The N×N play board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: GridSize,
    /// Row-major cell storage, `size * size` entries.
    cells: Vec<Cell>,
    /// Number of occupied cells; `cell_count` means the board is full.
    claimed: usize,
}

impl Board {
    /// Create an empty board of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size.cell_count()],
            claimed: 0,
        }
    }

    /// Reinitialize for a (possibly different) size, clearing every cell.
    ///
    /// Callable repeatedly; used on session restart.
    pub fn initialize(&mut self, size: GridSize) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size.cell_count(), Cell::default());
        self.claimed = 0;
    }

    /// Clear every cell's occupant without reallocating.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.occupant = None;
        }
        self.claimed = 0;
    }

    /// The board dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Whether the coordinates fall inside the grid.
    #[must_use]
    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.size() && column < self.size()
    }

    /// The occupant of a cell, or `None` if unclaimed or out of bounds.
    #[must_use]
    pub fn occupant(&self, row: usize, column: usize) -> Option<PlayerId> {
        if !self.in_bounds(row, column) {
            return None;
        }
        self.cells[self.index(row, column)].occupant
    }

    /// Whether the cell is occupied. Pure query, no side effects.
    #[must_use]
    pub fn is_occupied(&self, row: usize, column: usize) -> bool {
        self.occupant(row, column).is_some()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.claimed
    }

    /// Whether every cell is occupied (the draw condition, absent a winner).
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.claimed == self.size.cell_count()
    }

    /// Claim a cell for a player.
    ///
    /// Returns whether this claim completes a winning line. Fails with
    /// [`GameError::InvalidPosition`] for out-of-range coordinates and
    /// [`GameError::AlreadyClaimed`] for an occupied cell; neither failure
    /// mutates the board.
    pub fn claim(
        &mut self,
        row: usize,
        column: usize,
        player: PlayerId,
    ) -> Result<bool, GameError> {
        if !self.in_bounds(row, column) {
            return Err(GameError::InvalidPosition {
                row,
                column,
                size: self.size(),
            });
        }

        let index = self.index(row, column);
        if let Some(occupant) = self.cells[index].occupant {
            return Err(GameError::AlreadyClaimed {
                row,
                column,
                occupant,
            });
        }

        self.cells[index].occupant = Some(player);
        self.claimed += 1;

        Ok(self.completes_line(row, column, player))
    }

    /// Whether any line through the given cell is wholly owned by `player`.
    ///
    /// Scans row, column, then the diagonals the cell lies on, stopping at
    /// the first match.
    fn completes_line(&self, row: usize, column: usize, player: PlayerId) -> bool {
        LineTarget::through(self.size(), row, column)
            .into_iter()
            .any(|line| self.line_owned_by(line, player))
    }

    /// Whether every cell of `line` is occupied by `player`.
    ///
    /// An unclaimed cell anywhere in the line breaks the match immediately.
    #[must_use]
    pub fn line_owned_by(&self, line: LineTarget, player: PlayerId) -> bool {
        line.cells(self.size())
            .all(|(row, column)| self.occupant(row, column) == Some(player))
    }

    /// The unclaimed cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.occupant.is_none())
            .map(move |(i, _)| (i / size, i % size))
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.size() + column
    }
}
