//! Square board geometry

use serde::{Deserialize, Serialize};

/// A board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether two distinct cells touch, diagonals included
    pub fn touches(&self, other: &Cell) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

/// Square grid of `T`, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a `size` x `size` grid filled with `value`
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T> Grid<T> {
    /// Wrap row-major `cells`; `None` unless there are exactly `size * size`
    pub fn from_cells(size: usize, cells: Vec<T>) -> Option<Self> {
        (cells.len() == size * size).then_some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, cell: Cell) -> &T {
        &self.cells[self.index(cell)]
    }

    pub fn set(&mut self, cell: Cell, value: T) {
        let index = self.index(cell);
        self.cells[index] = value;
    }

    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.size, index % self.size)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cells.len()).map(move |i| self.cell_at(i))
    }

    /// Orthogonal neighbours of `cell` that lie on the board
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let size = self.size;
        let up = cell.row.checked_sub(1).map(|row| Cell::new(row, cell.col));
        let down = (cell.row + 1 < size).then(|| Cell::new(cell.row + 1, cell.col));
        let left = cell.col.checked_sub(1).map(|col| Cell::new(cell.row, col));
        let right = (cell.col + 1 < size).then(|| Cell::new(cell.row, cell.col + 1));
        [up, down, left, right].into_iter().flatten()
    }

    pub fn values(&self) -> &[T] {
        &self.cells
    }

    pub fn into_values(self) -> Vec<T> {
        self.cells
    }
}
