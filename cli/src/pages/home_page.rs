//! Home page: puzzle menu

use super::PageContext;
use crate::output::terminal::{apply_color, AnsiColor};
use anyhow::Result;

pub fn render(ctx: &mut PageContext) -> Result<Vec<String>> {
    let size = ctx.game.grid_size;
    let queens_href = ctx.router.with(|nav| nav.encode("/queens"));
    let entry = format!("► Queens ({}x{})  {}", size, size, queens_href);

    Ok(vec![
        "Home".to_string(),
        String::new(),
        if ctx.colour {
            apply_color(&entry, AnsiColor::Yellow)
        } else {
            entry
        },
        "   Each row, column and region holds exactly one queen.".to_string(),
        "   Queens never touch, not even diagonally.".to_string(),
        String::new(),
        "Type `go /queens` to play, `back` to return.".to_string(),
    ])
}
