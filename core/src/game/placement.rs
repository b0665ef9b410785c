//! Random queen placement
//!
//! A placement stores the queen column for every row. Valid placements use
//! every column once and keep queens on consecutive rows from touching.

use super::MAX_GRID_SIZE;
use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Place `size` queens at random with randomised backtracking
pub fn place_queens<R: Rng>(size: usize, rng: &mut R) -> Result<Vec<usize>, GameError> {
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(GameError::UnsupportedSize { size });
    }

    let mut columns = Vec::with_capacity(size);
    if add_row(&mut columns, size, rng) {
        Ok(columns)
    } else {
        Err(GameError::NoPlacement { size })
    }
}

fn add_row<R: Rng>(columns: &mut Vec<usize>, size: usize, rng: &mut R) -> bool {
    if columns.len() == size {
        return true;
    }

    let mut candidates: Vec<usize> = (0..size).collect();
    candidates.shuffle(rng);

    for col in candidates {
        if can_place(columns, col) {
            columns.push(col);
            if add_row(columns, size, rng) {
                return true;
            }
            columns.pop();
        }
    }
    false
}

/// Whether a queen in column `col` fits on the row after `columns`
fn can_place(columns: &[usize], col: usize) -> bool {
    if columns.contains(&col) {
        return false;
    }
    match columns.last() {
        Some(&previous) => previous.abs_diff(col) > 1,
        None => true,
    }
}

/// Whether `columns` is a valid placement on its own board
pub fn is_valid_placement(columns: &[usize]) -> bool {
    let size = columns.len();
    let mut used = vec![false; size];
    for (row, &col) in columns.iter().enumerate() {
        if col >= size || used[col] {
            return false;
        }
        used[col] = true;
        if row > 0 && columns[row - 1].abs_diff(col) <= 1 {
            return false;
        }
    }
    true
}
