//! Generated puzzle and answer checking

use super::grid::{Cell, Grid};
use serde::{Deserialize, Serialize};

/// First rule a proposed answer breaks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Expected {expected} queens, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("Queen on row {row} is off the board")]
    OffBoard { row: usize },

    #[error("Column {col} holds more than one queen")]
    SharedColumn { col: usize },

    #[error("Region {region} holds more than one queen")]
    SharedRegion { region: usize },

    #[error("Queens on rows {first} and {second} touch")]
    Touching { first: usize, second: usize },
}

/// Flattened export shape of a puzzle
#[derive(Debug, Serialize)]
struct PuzzleExport<'a> {
    size: usize,
    colour_grid: Vec<u32>,
    queen_grid: Vec<u32>,
    solution: &'a [usize],
}

/// A region board together with its intended solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Region id of every cell
    pub regions: Grid<usize>,
    /// Queen column for every row
    pub solution: Vec<usize>,
}

impl Puzzle {
    pub fn new(regions: Grid<usize>, solution: Vec<usize>) -> Self {
        Self { regions, solution }
    }

    pub fn size(&self) -> usize {
        self.regions.size()
    }

    pub fn region_at(&self, cell: Cell) -> usize {
        *self.regions.get(cell)
    }

    pub fn is_queen(&self, cell: Cell) -> bool {
        self.solution.get(cell.row) == Some(&cell.col)
    }

    /// Check a proposed answer, given as the queen column for every row
    pub fn verify(&self, columns: &[usize]) -> Result<(), Violation> {
        let size = self.size();
        if columns.len() != size {
            return Err(Violation::WrongCount {
                expected: size,
                actual: columns.len(),
            });
        }

        let mut used_cols = vec![false; size];
        let mut used_regions = vec![false; size];
        for (row, &col) in columns.iter().enumerate() {
            if col >= size {
                return Err(Violation::OffBoard { row });
            }
            if std::mem::replace(&mut used_cols[col], true) {
                return Err(Violation::SharedColumn { col });
            }
            let region = self.region_at(Cell::new(row, col));
            if region >= size || std::mem::replace(&mut used_regions[region], true) {
                return Err(Violation::SharedRegion { region });
            }
            if row > 0 && columns[row - 1].abs_diff(col) <= 1 {
                return Err(Violation::Touching {
                    first: row - 1,
                    second: row,
                });
            }
        }
        Ok(())
    }

    /// Flattened region colours numbered from 1
    pub fn colour_grid(&self) -> Vec<u32> {
        self.regions.values().iter().map(|&r| r as u32 + 1).collect()
    }

    /// Flattened board with 1 on queen cells and 0 elsewhere
    pub fn queen_grid(&self) -> Vec<u32> {
        self.regions
            .cells()
            .map(|cell| u32::from(self.is_queen(cell)))
            .collect()
    }

    /// Pretty JSON with `size`, `colour_grid`, `queen_grid` and `solution`
    pub fn to_json(&self) -> crate::Result<String> {
        let export = PuzzleExport {
            size: self.size(),
            colour_grid: self.colour_grid(),
            queen_grid: self.queen_grid(),
            solution: &self.solution,
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}
