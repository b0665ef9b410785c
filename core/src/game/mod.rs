//! Queens puzzle engine
//!
//! An N x N board is split into N contiguous regions. A solution places one
//! queen in every row, column and region with no two queens touching.

pub mod generator;
pub mod grid;
pub mod placement;
pub mod puzzle;
pub mod regions;
pub mod solver;

pub use generator::PuzzleGenerator;
pub use grid::{Cell, Grid};
pub use puzzle::{Puzzle, Violation};
pub use solver::{count_solutions, find_solutions, has_unique_solution};

/// Largest supported board
pub const MAX_GRID_SIZE: usize = 10;

/// Whether a `size` x `size` board can hold a valid placement
///
/// 2x2 and 3x3 boards always force two queens to touch.
pub fn is_playable_size(size: usize) -> bool {
    size == 1 || (4..=MAX_GRID_SIZE).contains(&size)
}
