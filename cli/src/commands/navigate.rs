//! One-shot navigation command

use crate::config::CliConfigLoader;
use crate::output::{output_lines, OutputHandle, StdoutHandle};
use crate::pages::{PageContext, PageRegistry};
use anyhow::{Context, Result};
use queens_core::{build_navigator, AppConfig, RouterHandle};
use tracing::info;

/// Navigate to `path` from the configured initial path and render the page
pub async fn navigate_command(path: String, loader: CliConfigLoader, colour: bool) -> Result<()> {
    let config = loader.load().await?;
    navigate_to(&config, &path, colour, &StdoutHandle)
}

fn navigate_to<T: OutputHandle>(
    config: &AppConfig,
    path: &str,
    colour: bool,
    out: &T,
) -> Result<()> {
    let router = RouterHandle::new(build_navigator(&config.router)?);
    router
        .navigate(&config.router.initial_path)
        .with_context(|| format!("Invalid initial path '{}'", config.router.initial_path))?;

    let view = router.navigate(path)?;
    info!(view = %view, "Activated view");

    if let Some(location) = router.current_location() {
        out.println(format!("{} -> {}", location, view));
    }

    let mut ctx = PageContext::new(router.clone(), config.game.clone()).with_colour(colour);
    let lines = PageRegistry::standard().render(Some(view), &mut ctx)?;
    output_lines(out, &lines);
    Ok(())
}
