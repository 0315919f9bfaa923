//! Line selectors: rows, columns, and the two full-length diagonals.
//!
//! A `LineTarget` names one complete line of the board. It is both the
//! vocabulary of the win-detection scan (which lines pass through a claimed
//! cell) and the scripted-scenario selector (which line a test fills).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One complete line of an N×N board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineTarget {
    /// The full row at the given index.
    Row(usize),
    /// The full column at the given index.
    Column(usize),
    /// (0,0) .. (N-1,N-1).
    MainDiagonal,
    /// (0,N-1) .. (N-1,0).
    AntiDiagonal,
}

impl LineTarget {
    /// The lines passing through a cell, in scan order: row, column, main
    /// diagonal, anti-diagonal.
    ///
    /// Diagonals are included only when the cell actually lies on them;
    /// scanning a diagonal for an off-diagonal cell would test an unrelated
    /// line.
    #[must_use]
    pub fn through(size: usize, row: usize, column: usize) -> SmallVec<[LineTarget; 4]> {
        let mut lines = SmallVec::new();
        lines.push(LineTarget::Row(row));
        lines.push(LineTarget::Column(column));
        if row == column {
            lines.push(LineTarget::MainDiagonal);
        }
        if row + column == size - 1 {
            lines.push(LineTarget::AntiDiagonal);
        }
        lines
    }

    /// The cells of this line in increasing index order.
    pub fn cells(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self {
            LineTarget::Row(row) => (row, i),
            LineTarget::Column(column) => (i, column),
            LineTarget::MainDiagonal => (i, i),
            LineTarget::AntiDiagonal => (i, size - 1 - i),
        })
    }

    /// Whether the given cell lies on this line.
    #[must_use]
    pub fn contains(self, size: usize, row: usize, column: usize) -> bool {
        match self {
            LineTarget::Row(r) => row == r,
            LineTarget::Column(c) => column == c,
            LineTarget::MainDiagonal => row == column,
            LineTarget::AntiDiagonal => row + column == size - 1,
        }
    }
}

impl std::fmt::Display for LineTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineTarget::Row(r) => write!(f, "row {}", r),
            LineTarget::Column(c) => write!(f, "column {}", c),
            LineTarget::MainDiagonal => write!(f, "main diagonal"),
            LineTarget::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_through_center_of_3x3() {
        // (1,1) lies on its row, its column, and both diagonals
        let lines = LineTarget::through(3, 1, 1);
        assert_eq!(
            lines.as_slice(),
            [
                LineTarget::Row(1),
                LineTarget::Column(1),
                LineTarget::MainDiagonal,
                LineTarget::AntiDiagonal,
            ]
            .as_slice()
        );
    }

    #[test]
    fn test_through_off_diagonal_cell() {
        let lines = LineTarget::through(3, 0, 1);
        assert_eq!(
            lines.as_slice(),
            [LineTarget::Row(0), LineTarget::Column(1)].as_slice()
        );
    }

    #[test]
    fn test_through_corner_cells() {
        let lines = LineTarget::through(4, 0, 0);
        assert!(lines.contains(&LineTarget::MainDiagonal));
        assert!(!lines.contains(&LineTarget::AntiDiagonal));

        let lines = LineTarget::through(4, 0, 3);
        assert!(!lines.contains(&LineTarget::MainDiagonal));
        assert!(lines.contains(&LineTarget::AntiDiagonal));
    }

    #[test]
    fn test_4x4_has_no_center_cell_on_both_diagonals() {
        for row in 0..4 {
            for column in 0..4 {
                let lines = LineTarget::through(4, row, column);
                let both = lines.contains(&LineTarget::MainDiagonal)
                    && lines.contains(&LineTarget::AntiDiagonal);
                assert!(!both, "({}, {}) cannot lie on both diagonals", row, column);
            }
        }
    }

    #[test]
    fn test_cells_enumeration() {
        let row: Vec<_> = LineTarget::Row(2).cells(3).collect();
        assert_eq!(row, vec![(2, 0), (2, 1), (2, 2)]);

        let column: Vec<_> = LineTarget::Column(0).cells(3).collect();
        assert_eq!(column, vec![(0, 0), (1, 0), (2, 0)]);

        let main: Vec<_> = LineTarget::MainDiagonal.cells(4).collect();
        assert_eq!(main, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);

        let anti: Vec<_> = LineTarget::AntiDiagonal.cells(4).collect();
        assert_eq!(anti, vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn test_contains_matches_cells() {
        for size in [3, 4] {
            let lines = [
                LineTarget::Row(1),
                LineTarget::Column(2),
                LineTarget::MainDiagonal,
                LineTarget::AntiDiagonal,
            ];
            for line in lines {
                for row in 0..size {
                    for column in 0..size {
                        let on_line = line.cells(size).any(|cell| cell == (row, column));
                        assert_eq!(line.contains(size, row, column), on_line);
                    }
                }
            }
        }
    }
}
