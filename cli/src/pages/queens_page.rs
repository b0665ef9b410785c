//! Queens page: the puzzle board

use super::PageContext;
use crate::output::terminal::{apply_rgb_background, region_colour};
use anyhow::Result;
use queens_core::game::Cell;
use queens_core::Puzzle;
use tracing::warn;

/// Render the page; a board that cannot be generated is reported on the page
pub fn render(ctx: &mut PageContext) -> Result<Vec<String>> {
    let (colour, reveal, size) = (ctx.colour, ctx.reveal, ctx.game.grid_size);
    let mut lines = vec![format!("Queens {}x{}", size, size), String::new()];

    let puzzle = match ctx.puzzle() {
        Ok(puzzle) => puzzle,
        Err(error) => {
            warn!(%error, "Puzzle generation failed");
            lines.push(format!("Could not generate a board: {}", error));
            return Ok(lines);
        }
    };

    lines.extend(render_board(puzzle, reveal, colour));
    lines.push(String::new());
    if reveal {
        let columns: Vec<String> = puzzle.solution.iter().map(|c| c.to_string()).collect();
        lines.push(format!("Solution columns: {}", columns.join(" ")));
    }
    lines.push("Type `new` for another board, `reveal` to show the queens.".to_string());
    Ok(lines)
}

/// Render the board, one line per row
///
/// With colour each region gets a background; without it regions are
/// lettered and revealed queens are marked with `*`.
pub fn render_board(puzzle: &Puzzle, reveal: bool, colour: bool) -> Vec<String> {
    let size = puzzle.size();
    (0..size)
        .map(|row| {
            let cells: Vec<String> = (0..size)
                .map(|col| {
                    let cell = Cell::new(row, col);
                    let region = puzzle.region_at(cell);
                    let queen = reveal && puzzle.is_queen(cell);
                    if colour {
                        let symbol = if queen { " ♛ " } else { "   " };
                        apply_rgb_background(symbol, region_colour(region))
                    } else {
                        format!("{}{}", region_letter(region), if queen { '*' } else { ' ' })
                    }
                })
                .collect();
            if colour {
                cells.concat()
            } else {
                cells.join(" ").trim_end().to_string()
            }
        })
        .collect()
}

fn region_letter(region: usize) -> char {
    char::from(b'A' + (region % 26) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::context;
    use queens_core::game::Grid;

    fn sample() -> Puzzle {
        #[rustfmt::skip]
        let regions = Grid::from_cells(4, vec![
            0, 0, 1, 1,
            2, 0, 1, 1,
            2, 2, 3, 1,
            2, 3, 3, 3,
        ]).unwrap();
        Puzzle::new(regions, vec![1, 3, 0, 2])
    }

    #[test]
    fn test_plain_board() {
        let board = render_board(&sample(), false, false);
        assert_eq!(board[0], "A  A  B  B");
        assert_eq!(board[3], "C  D  D  D");
    }

    #[test]
    fn test_revealed_board() {
        let board = render_board(&sample(), true, false);
        assert_eq!(board[0], "A  A* B  B");
        assert_eq!(board[1], "C  A  B  B*");
    }

    #[test]
    fn test_coloured_board_has_backgrounds() {
        let board = render_board(&sample(), true, true);
        assert_eq!(board.len(), 4);
        assert!(board[0].contains("\x1b[48;2;"));
        assert!(board[0].contains('♛'));
    }

    #[test]
    fn test_generation_failure_is_shown_on_page() {
        let mut ctx = context();
        ctx.game.grid_size = 2;
        let lines = render(&mut ctx).unwrap();
        assert_eq!(lines[0], "Queens 2x2");
        assert_eq!(
            lines[2],
            "Could not generate a board: No queen placement exists for a 2x2 grid"
        );
    }

    #[test]
    fn test_page_uses_configured_size() {
        let mut ctx = context();
        ctx.reveal = true;
        let lines = render(&mut ctx).unwrap();
        assert_eq!(lines[0], "Queens 5x5");
        assert!(lines.iter().any(|l| l.starts_with("Solution columns:")));
    }
}
