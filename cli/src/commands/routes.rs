//! Route table listing command

use crate::config::CliConfigLoader;
use anyhow::Result;
use queens_core::{build_navigator, AppView, Navigator};
use tracing::info;

/// Print every route with its view and encoded location
pub async fn routes_command(loader: CliConfigLoader) -> Result<()> {
    let config = loader.load().await?;
    let navigator = build_navigator(&config.router)?;
    info!(count = navigator.table().len(), "Listing routes");

    println!("Routes ({} history)\n", navigator.strategy());
    for line in route_lines(&navigator) {
        println!("{}", line);
    }
    Ok(())
}

fn route_lines(navigator: &Navigator<AppView>) -> Vec<String> {
    navigator
        .table()
        .routes()
        .iter()
        .map(|route| {
            let mut line = format!(
                "{:<8} {:<10} {:<10} {}",
                route.path,
                route.view,
                navigator.encode(&route.path),
                route.label()
            );
            if let Some(description) = &route.description {
                line.push_str(" - ");
                line.push_str(description);
            }
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use queens_core::RouterSettings;

    #[test]
    fn test_route_lines_in_table_order() {
        let navigator = build_navigator(&RouterSettings::default()).unwrap();
        let lines = route_lines(&navigator);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("/        StartPage  #/"));
        assert!(lines[1].starts_with("/home    HomePage   #/home"));
        assert!(lines[2].starts_with("/queens  Queens     #/queens"));
        assert!(lines[0].ends_with("Welcome screen"));
    }
}
