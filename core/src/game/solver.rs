//! Backtracking solver for region boards
//!
//! A solution has one queen per row, column and region, with no two queens
//! touching. Search stops once `limit` solutions are found.

use super::grid::{Cell, Grid};

/// Find up to `limit` solutions, each given as the queen column per row
pub fn find_solutions(regions: &Grid<usize>, limit: usize) -> Vec<Vec<usize>> {
    let size = regions.size();
    let mut search = Search {
        regions,
        columns: Vec::with_capacity(size),
        used_cols: vec![false; size],
        used_regions: vec![false; size],
        found: Vec::new(),
        limit,
    };
    if limit > 0 {
        search.run();
    }
    search.found
}

/// Count solutions, stopping at `limit`
pub fn count_solutions(regions: &Grid<usize>, limit: usize) -> usize {
    find_solutions(regions, limit).len()
}

/// Whether the board has exactly one solution
pub fn has_unique_solution(regions: &Grid<usize>) -> bool {
    count_solutions(regions, 2) == 1
}

struct Search<'a> {
    regions: &'a Grid<usize>,
    columns: Vec<usize>,
    used_cols: Vec<bool>,
    used_regions: Vec<bool>,
    found: Vec<Vec<usize>>,
    limit: usize,
}

impl Search<'_> {
    fn run(&mut self) {
        let size = self.regions.size();
        let row = self.columns.len();
        if row == size {
            self.found.push(self.columns.clone());
            return;
        }

        for col in 0..size {
            if self.found.len() >= self.limit {
                return;
            }
            if self.used_cols[col] {
                continue;
            }
            if let Some(&previous) = self.columns.last() {
                if previous.abs_diff(col) <= 1 {
                    continue;
                }
            }
            let region = *self.regions.get(Cell::new(row, col));
            // Region ids outside 0..size cannot hold a queen of their own
            if region >= size || self.used_regions[region] {
                continue;
            }

            self.used_cols[col] = true;
            self.used_regions[region] = true;
            self.columns.push(col);
            self.run();
            self.columns.pop();
            self.used_regions[region] = false;
            self.used_cols[col] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: usize, cells: &[usize]) -> Grid<usize> {
        Grid::from_cells(size, cells.to_vec()).expect("square board")
    }

    #[test]
    fn test_unique_board() {
        // Queens at columns [1, 3, 0, 2], regions drawn around them
        #[rustfmt::skip]
        let regions = board(4, &[
            0, 0, 1, 1,
            2, 0, 1, 1,
            2, 2, 3, 1,
            2, 3, 3, 3,
        ]);
        let solutions = find_solutions(&regions, 10);
        assert_eq!(solutions, vec![vec![1, 3, 0, 2]]);
        assert!(has_unique_solution(&regions));
    }

    #[test]
    fn test_row_regions_are_ambiguous() {
        // Each row is its own region: both 4x4 placements solve it
        #[rustfmt::skip]
        let regions = board(4, &[
            0, 0, 0, 0,
            1, 1, 1, 1,
            2, 2, 2, 2,
            3, 3, 3, 3,
        ]);
        assert_eq!(count_solutions(&regions, 10), 2);
        assert_eq!(count_solutions(&regions, 1), 1);
        assert!(!has_unique_solution(&regions));
    }

    #[test]
    fn test_unsolvable_board() {
        #[rustfmt::skip]
        let regions = board(4, &[
            0, 0, 0, 0,
            0, 0, 0, 0,
            1, 1, 2, 2,
            1, 1, 3, 3,
        ]);
        assert_eq!(count_solutions(&regions, 10), 0);
        assert!(find_solutions(&regions, 0).is_empty());
    }
}
