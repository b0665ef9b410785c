//! Puzzle generation
//!
//! Place queens, grow one region per queen, then repair the regions until
//! the intended placement is the only solution.

use super::grid::{Cell, Grid};
use super::placement::place_queens;
use super::puzzle::Puzzle;
use super::regions::{grow_regions, is_contiguous};
use super::solver::find_solutions;
use crate::config::GameSettings;
use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

/// Builds uniquely solvable puzzles of a fixed size
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    size: usize,
    max_attempts: usize,
    max_repairs: usize,
}

impl PuzzleGenerator {
    /// Create a generator for `size` x `size` boards
    pub fn new(size: usize) -> Self {
        Self {
            size,
            max_attempts: GameSettings::default().max_attempts,
            max_repairs: size * size * 2,
        }
    }

    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(settings.grid_size).with_max_attempts(settings.max_attempts)
    }

    /// Set how many fresh boards may be tried
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Set how many region repairs one board may receive
    pub fn with_max_repairs(mut self, max_repairs: usize) -> Self {
        self.max_repairs = max_repairs;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Generate a puzzle whose only solution is its intended placement
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Puzzle, GameError> {
        for attempt in 1..=self.max_attempts {
            let solution = place_queens(self.size, rng)?;
            let mut regions = grow_regions(&solution, rng);

            if self.make_unique(&solution, &mut regions, rng) {
                info!(size = self.size, attempt, "Generated puzzle");
                return Ok(Puzzle::new(regions, solution));
            }
            debug!(size = self.size, attempt, "Board stayed ambiguous, restarting");
        }

        Err(GameError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Repair `regions` until `solution` is the only solution
    fn make_unique<R: Rng>(
        &self,
        solution: &[usize],
        regions: &mut Grid<usize>,
        rng: &mut R,
    ) -> bool {
        for repair in 0..=self.max_repairs {
            let Some(alternative) = find_solutions(regions, 2)
                .into_iter()
                .find(|candidate| candidate.as_slice() != solution)
            else {
                return true;
            };
            if repair == self.max_repairs {
                break;
            }

            let moves = breaking_moves(solution, &alternative, regions);
            let Some(&(cell, region)) = moves.choose(rng) else {
                return false;
            };
            debug!(row = cell.row, col = cell.col, region, "Moving cell to break alternative");
            regions.set(cell, region);
        }
        false
    }
}

/// Moves that push one of `alternative`'s queens into a neighbouring region
///
/// Intended queen cells never move and the shrinking region stays
/// contiguous, so `solution` remains valid after any of these moves.
fn breaking_moves(
    solution: &[usize],
    alternative: &[usize],
    regions: &Grid<usize>,
) -> Vec<(Cell, usize)> {
    let mut moves = Vec::new();
    for (row, (&intended, &col)) in solution.iter().zip(alternative).enumerate() {
        if intended == col {
            continue;
        }
        let cell = Cell::new(row, col);
        let current = *regions.get(cell);
        if !is_contiguous(regions, current, Some(cell)) {
            continue;
        }
        for neighbour in regions.neighbours(cell) {
            let target = *regions.get(neighbour);
            if target != current && !moves.contains(&(cell, target)) {
                moves.push((cell, target));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::placement::is_valid_placement;
    use crate::game::regions::region_count;
    use crate::game::solver::has_unique_solution;
    use crate::game::MAX_GRID_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_well_formed(puzzle: &Puzzle) {
        let size = puzzle.size();
        assert!(is_valid_placement(&puzzle.solution));
        assert_eq!(puzzle.verify(&puzzle.solution), Ok(()));
        assert_eq!(region_count(&puzzle.regions), size);
        for region in 0..size {
            assert!(is_contiguous(&puzzle.regions, region, None));
        }
        assert!(has_unique_solution(&puzzle.regions));
    }

    #[test]
    fn test_generates_unique_puzzles() {
        for (seed, size) in [(1, 5), (2, 6), (3, 6), (4, 7), (5, 8)] {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = PuzzleGenerator::new(size)
                .generate(&mut rng)
                .expect("puzzle generation");
            assert_eq!(puzzle.size(), size);
            assert_well_formed(&puzzle);
        }
    }

    #[test]
    fn test_generates_largest_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = PuzzleGenerator::new(MAX_GRID_SIZE)
            .generate(&mut rng)
            .expect("largest puzzle");
        assert_well_formed(&puzzle);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = PuzzleGenerator::new(6);
        let first = generator.generate(&mut StdRng::seed_from_u64(99)).expect("first");
        let second = generator.generate(&mut StdRng::seed_from_u64(99)).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_cell_board() {
        let puzzle = PuzzleGenerator::new(1)
            .generate(&mut StdRng::seed_from_u64(0))
            .expect("1x1 puzzle");
        assert_eq!(puzzle.solution, vec![0]);
        assert_eq!(puzzle.queen_grid(), vec![1]);
    }

    #[test]
    fn test_impossible_sizes_fail_fast() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            PuzzleGenerator::new(3).generate(&mut rng),
            Err(GameError::NoPlacement { size: 3 })
        );
        assert_eq!(
            PuzzleGenerator::new(0).generate(&mut rng),
            Err(GameError::UnsupportedSize { size: 0 })
        );
    }

    #[test]
    fn test_exhausted_without_repairs() {
        // Without repairs only boards that grew unique on their own succeed
        let generator = PuzzleGenerator::new(4).with_max_attempts(3).with_max_repairs(0);
        let mut rng = StdRng::seed_from_u64(11);
        match generator.generate(&mut rng) {
            Ok(puzzle) => assert_well_formed(&puzzle),
            Err(error) => assert_eq!(error, GameError::Exhausted { attempts: 3 }),
        }
    }

    #[test]
    fn test_from_settings() {
        let settings = GameSettings {
            grid_size: 5,
            max_attempts: 0,
            seed: None,
        };
        let generator = PuzzleGenerator::from_settings(&settings);
        assert_eq!(generator.size(), 5);
        assert_eq!(generator.max_attempts, 1);
    }
}
