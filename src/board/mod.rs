//! Board representation and line-matching.

pub mod grid;
pub mod line;

pub use grid::{Board, Cell, GridSize};
pub use line::LineTarget;
