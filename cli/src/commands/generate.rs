//! Puzzle generation command

use crate::config::CliConfigLoader;
use crate::pages::queens_page::render_board;
use anyhow::{Context, Result};
use queens_core::{GameSettings, Puzzle, PuzzleGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Generate one puzzle and print it as a board or as JSON
pub async fn generate_command(
    loader: CliConfigLoader,
    json: bool,
    reveal: bool,
    colour: bool,
) -> Result<()> {
    let config = loader.load().await?;
    let puzzle = generate(&config.game)?;

    if json {
        let json = puzzle.to_json().context("Failed to serialize puzzle")?;
        println!("{}", json);
    } else {
        for line in render_board(&puzzle, reveal, colour) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn generate(settings: &GameSettings) -> Result<Puzzle> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let puzzle = PuzzleGenerator::from_settings(settings)
        .generate(&mut rng)
        .with_context(|| format!("Failed to generate a {0}x{0} puzzle", settings.grid_size))?;
    info!(size = puzzle.size(), "Generated puzzle");
    Ok(puzzle)
}
