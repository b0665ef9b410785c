//! Page renderers for the application views
//!
//! Each view has a renderer that turns the current page context into text
//! lines. A fallback renderer covers the case where no view is active.

pub mod home_page;
pub mod queens_page;
pub mod start_page;

use anyhow::Result;
use queens_core::{AppView, GameError, GameSettings, Puzzle, PuzzleGenerator, RouterHandle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Type alias for page render functions
pub type PageRenderer = Box<dyn Fn(&mut PageContext) -> Result<Vec<String>> + Send + Sync>;

/// State shared by every page
pub struct PageContext {
    /// Router handle for reading the location and listing links
    pub router: RouterHandle<AppView>,
    /// Puzzle settings
    pub game: GameSettings,
    /// Whether to emit ANSI colours
    pub colour: bool,
    /// Whether the Queens page shows the solution
    pub reveal: bool,
    rng: StdRng,
    puzzle: Option<Puzzle>,
}

impl PageContext {
    /// Create a context; a configured seed makes puzzles reproducible
    pub fn new(router: RouterHandle<AppView>, game: GameSettings) -> Self {
        let rng = match game.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            router,
            game,
            colour: true,
            reveal: false,
            rng,
            puzzle: None,
        }
    }

    /// Enable or disable ANSI colours
    pub fn with_colour(mut self, colour: bool) -> Self {
        self.colour = colour;
        self
    }

    /// Current puzzle, generated on first use
    pub fn puzzle(&mut self) -> Result<&Puzzle, GameError> {
        let puzzle = match self.puzzle.take() {
            Some(puzzle) => puzzle,
            None => PuzzleGenerator::from_settings(&self.game).generate(&mut self.rng)?,
        };
        let puzzle: &Puzzle = self.puzzle.insert(puzzle);
        Ok(puzzle)
    }

    /// Discard the current puzzle; the next render generates a fresh one
    pub fn discard_puzzle(&mut self) {
        self.puzzle = None;
        self.reveal = false;
    }
}

/// Map of views to their renderers
pub struct PageRegistry {
    pages: HashMap<AppView, PageRenderer>,
    fallback_page: Option<PageRenderer>,
}

impl PageRegistry {
    /// Start building a registry
    pub fn builder() -> PageRegistryBuilder {
        PageRegistryBuilder::new()
    }

    /// Registry with every application page
    pub fn standard() -> Self {
        Self::builder()
            .page(AppView::StartPage, start_page::render)
            .page(AppView::HomePage, home_page::render)
            .page(AppView::Queens, queens_page::render)
            .fallback(not_found)
            .build()
    }

    /// Render `view`, or the fallback when there is no renderer for it
    pub fn render(&self, view: Option<AppView>, ctx: &mut PageContext) -> Result<Vec<String>> {
        if let Some(renderer) = view.and_then(|v| self.pages.get(&v)) {
            renderer(ctx)
        } else if let Some(fallback) = &self.fallback_page {
            fallback(ctx)
        } else {
            not_found(ctx)
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}

/// Builder for page registries
pub struct PageRegistryBuilder {
    pages: HashMap<AppView, PageRenderer>,
    fallback_page: Option<PageRenderer>,
}

impl PageRegistryBuilder {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            fallback_page: None,
        }
    }

    /// Register the renderer for a view
    pub fn page<F>(mut self, view: AppView, renderer: F) -> Self
    where
        F: Fn(&mut PageContext) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.pages.insert(view, Box::new(renderer));
        self
    }

    /// Set a fallback page for views without a renderer
    pub fn fallback<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&mut PageContext) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        self.fallback_page = Some(Box::new(renderer));
        self
    }

    pub fn build(self) -> PageRegistry {
        PageRegistry {
            pages: self.pages,
            fallback_page: self.fallback_page,
        }
    }
}

impl Default for PageRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Default fallback: route not found message
fn not_found(ctx: &mut PageContext) -> Result<Vec<String>> {
    let location = ctx
        .router
        .current_location()
        .map(|l| l.href)
        .unwrap_or_else(|| "(none)".to_string());
    Ok(vec![
        "Route Not Found".to_string(),
        format!("Unknown route: {}", location),
    ])
}

/// Links to every route, as `name  href` lines
pub fn route_links(router: &RouterHandle<AppView>) -> Vec<String> {
    router.with(|nav| {
        nav.table()
            .routes()
            .iter()
            .map(|route| format!("  {:<8} {}", route.label(), nav.encode(&route.path)))
            .collect()
    })
}
