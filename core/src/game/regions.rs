//! Region growth and contiguity checks
//!
//! Regions are numbered by the row of the queen that seeds them.

use super::grid::{Cell, Grid};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashSet, VecDeque};

/// Grow one region per queen until every cell is coloured
///
/// Frontier cells are taken in random order and join a random coloured
/// orthogonal neighbour, so every region stays contiguous.
pub fn grow_regions<R: Rng>(solution: &[usize], rng: &mut R) -> Grid<usize> {
    let size = solution.len();
    let mut colours: Grid<Option<usize>> = Grid::filled(size, None);
    let mut frontier: Vec<Cell> = Vec::new();
    let mut seen: HashSet<Cell> = HashSet::new();

    for (row, &col) in solution.iter().enumerate() {
        let queen = Cell::new(row, col);
        colours.set(queen, Some(row));
        seen.insert(queen);
    }
    for (row, &col) in solution.iter().enumerate() {
        push_uncoloured(&colours, Cell::new(row, col), &mut frontier, &mut seen);
    }

    while !frontier.is_empty() {
        let cell = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        let options: Vec<usize> = colours
            .neighbours(cell)
            .filter_map(|n| *colours.get(n))
            .collect();
        if let Some(&colour) = options.choose(rng) {
            colours.set(cell, Some(colour));
        }
        push_uncoloured(&colours, cell, &mut frontier, &mut seen);
    }

    let cells = colours.into_values().into_iter().map(|c| c.unwrap_or(0)).collect();
    Grid::from_cells(size, cells).unwrap_or_else(|| Grid::filled(size, 0))
}

fn push_uncoloured(
    colours: &Grid<Option<usize>>,
    cell: Cell,
    frontier: &mut Vec<Cell>,
    seen: &mut HashSet<Cell>,
) {
    for neighbour in colours.neighbours(cell) {
        if colours.get(neighbour).is_none() && seen.insert(neighbour) {
            frontier.push(neighbour);
        }
    }
}

/// Whether the cells of `region` form one orthogonally connected piece
///
/// Cells listed in `excluded` are treated as belonging to another region.
pub fn is_contiguous(regions: &Grid<usize>, region: usize, excluded: Option<Cell>) -> bool {
    let members: Vec<Cell> = regions
        .cells()
        .filter(|&c| *regions.get(c) == region && Some(c) != excluded)
        .collect();
    let Some(&start) = members.first() else {
        return false;
    };

    let mut visited: HashSet<Cell> = HashSet::from([start]);
    let mut queue: VecDeque<Cell> = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for next in regions.neighbours(current) {
            if *regions.get(next) == region && Some(next) != excluded && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited.len() == members.len()
}

/// Number of distinct regions present on the board
pub fn region_count(regions: &Grid<usize>) -> usize {
    regions.values().iter().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::placement::place_queens;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grown_regions_cover_board() {
        let mut rng = StdRng::seed_from_u64(42);
        let solution = place_queens(6, &mut rng).expect("placement exists");
        let regions = grow_regions(&solution, &mut rng);

        assert_eq!(regions.size(), 6);
        assert_eq!(region_count(&regions), 6);
        for region in 0..6 {
            assert!(is_contiguous(&regions, region, None), "region {} split", region);
        }
    }

    #[test]
    fn test_queens_keep_their_region() {
        let mut rng = StdRng::seed_from_u64(3);
        let solution = place_queens(8, &mut rng).expect("placement exists");
        let regions = grow_regions(&solution, &mut rng);

        for (row, &col) in solution.iter().enumerate() {
            assert_eq!(*regions.get(Cell::new(row, col)), row);
        }
    }

    #[test]
    fn test_contiguity_with_exclusion() {
        // 0 0 0
        // 1 1 1
        // 2 2 2
        let regions = Grid::from_cells(3, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]).expect("3x3 grid");
        assert!(is_contiguous(&regions, 1, None));
        assert!(!is_contiguous(&regions, 1, Some(Cell::new(1, 1))));
        assert!(is_contiguous(&regions, 1, Some(Cell::new(1, 0))));
        assert!(!is_contiguous(&regions, 5, None));
    }
}
