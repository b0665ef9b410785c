//! Start page: welcome screen with links to every route

use super::{route_links, PageContext};
use crate::output::terminal::{apply_color, AnsiColor};
use anyhow::Result;

pub fn render(ctx: &mut PageContext) -> Result<Vec<String>> {
    let title = "Queens Nav";
    let mut lines = vec![
        if ctx.colour {
            apply_color(title, AnsiColor::Cyan)
        } else {
            title.to_string()
        },
        "Place one queen in every row, column and coloured region.".to_string(),
        String::new(),
        "Routes:".to_string(),
    ];
    lines.extend(route_links(&ctx.router));
    lines.push(String::new());
    let hint = "Type `go /home` to continue, `help` for commands.";
    lines.push(if ctx.colour {
        apply_color(hint, AnsiColor::Gray)
    } else {
        hint.to_string()
    });
    Ok(lines)
}
