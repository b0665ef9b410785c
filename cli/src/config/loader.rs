//! Simple CLI configuration loader for Queens Nav
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./queens.json or ./.queens/config.json
//! 3. User config: <config dir>/queens/config.json
//! 4. Built-in defaults
//!
//! Environment variables are applied on top of the loaded file, and flag
//! overrides on top of those.

use anyhow::{anyhow, Context, Result};
use queens_core::{AppConfig, HistoryStrategy};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the history strategy
pub const ENV_HISTORY: &str = "QUEENS_HISTORY";
/// Environment variable overriding the router base
pub const ENV_BASE: &str = "QUEENS_BASE";
/// Environment variable overriding the puzzle size
pub const ENV_GRID_SIZE: &str = "QUEENS_GRID_SIZE";
/// Environment variable fixing the puzzle seed
pub const ENV_SEED: &str = "QUEENS_SEED";

/// CLI configuration loader
#[derive(Debug, Clone, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    history_override: Option<HistoryStrategy>,
    grid_size_override: Option<usize>,
    seed_override: Option<u64>,
    /// Skip environment variables
    ignore_env: bool,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set history strategy override
    pub fn with_history_override(mut self, history: HistoryStrategy) -> Self {
        self.history_override = Some(history);
        self
    }

    /// Set grid size override
    pub fn with_grid_size_override(mut self, size: usize) -> Self {
        self.grid_size_override = Some(size);
        self
    }

    /// Set seed override
    pub fn with_seed_override(mut self, seed: u64) -> Self {
        self.seed_override = Some(seed);
        self
    }

    /// Do not read environment overrides
    pub fn without_env(mut self) -> Self {
        self.ignore_env = true;
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<AppConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            let expanded = expand_path(override_path);
            self.load_from_path(&expanded).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply environment overrides
        if !self.ignore_env {
            self.apply_env(&mut config, |key| std::env::var(key).ok())?;
        }

        // Step 3: Apply flag overrides
        if let Some(history) = self.history_override {
            config.router.history = history;
        }
        if let Some(size) = self.grid_size_override {
            config.game.grid_size = size;
        }
        if let Some(seed) = self.seed_override {
            config.game.seed = Some(seed);
        }

        config
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<AppConfig> {
        let cwd = std::env::current_dir()?;
        let mut candidates = vec![
            cwd.join("queens.json"),
            cwd.join(".queens").join("config.json"),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("queens").join("config.json"));
        }

        for candidate in candidates {
            if candidate.is_file() {
                return self.load_file(&candidate).await;
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(AppConfig::default())
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<AppConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<AppConfig> {
        debug!("Loading configuration from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        AppConfig::from_json(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment overrides read through `lookup`
    fn apply_env<F>(&self, config: &mut AppConfig, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(history) = lookup(ENV_HISTORY) {
            config.router.history = history
                .parse()
                .map_err(|e: String| anyhow!("{}: {}", ENV_HISTORY, e))?;
        }
        if let Some(base) = lookup(ENV_BASE) {
            config.router.base = base;
        }
        if let Some(size) = lookup(ENV_GRID_SIZE) {
            config.game.grid_size = size
                .parse()
                .with_context(|| format!("{} must be a number, got '{}'", ENV_GRID_SIZE, size))?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            config.game.seed = Some(
                seed.parse()
                    .with_context(|| format!("{} must be a number, got '{}'", ENV_SEED, seed))?,
            );
        }
        Ok(())
    }
}

/// Expand `~` and environment variables in a user-supplied path
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => path.to_path_buf(),
    }
}
