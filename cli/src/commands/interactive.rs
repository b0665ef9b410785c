//! Interactive navigation session

use crate::config::CliConfigLoader;
use crate::output::{output_lines, OutputHandle, StdoutHandle};
use crate::pages::{route_links, PageContext, PageRegistry};
use anyhow::Result;
use queens_core::{build_navigator, AppConfig, AppView, RouterError, RouterHandle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// A command typed at the session prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Go(String),
    Open(String),
    Replace(String),
    Back,
    Forward,
    Where,
    Routes,
    New,
    Reveal,
    Help,
    Quit,
}

/// Errors for unparseable session input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command '{0}', type `help` for a list")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

impl SessionCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };
        let argument = parts.next().map(str::to_string);

        let command = match word {
            "go" | "navigate" => {
                SessionCommand::Go(argument.ok_or(ParseError::MissingArgument("go"))?)
            }
            "open" => SessionCommand::Open(argument.ok_or(ParseError::MissingArgument("open"))?),
            "replace" => {
                SessionCommand::Replace(argument.ok_or(ParseError::MissingArgument("replace"))?)
            }
            "back" => SessionCommand::Back,
            "forward" => SessionCommand::Forward,
            "where" | "location" => SessionCommand::Where,
            "routes" => SessionCommand::Routes,
            "new" => SessionCommand::New,
            "reveal" => SessionCommand::Reveal,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            // A bare path navigates directly
            path if path.starts_with('/') => SessionCommand::Go(path.to_string()),
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Whether the session keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Router, pages and page state for one session
pub struct Session {
    router: RouterHandle<AppView>,
    pages: PageRegistry,
    ctx: PageContext,
}

impl Session {
    /// Build a session and navigate to the configured initial path
    pub fn new(config: &AppConfig, colour: bool) -> Result<Self> {
        let router = RouterHandle::new(build_navigator(&config.router)?);
        router.navigate(&config.router.initial_path)?;
        let ctx = PageContext::new(router.clone(), config.game.clone()).with_colour(colour);
        let pages = PageRegistry::standard();
        debug!(pages = pages.len(), "Session ready");

        Ok(Self { router, pages, ctx })
    }

    pub fn router(&self) -> &RouterHandle<AppView> {
        &self.router
    }

    /// Render the active view
    pub fn render<T: OutputHandle>(&mut self, out: &T) -> Result<()> {
        if let Some(location) = self.router.current_location() {
            out.println(format!("[{}]", location));
        }
        let lines = self.pages.render(self.router.active_view(), &mut self.ctx)?;
        output_lines(out, &lines);
        Ok(())
    }

    /// Run one command
    pub fn execute<T: OutputHandle>(&mut self, command: SessionCommand, out: &T) -> Result<Flow> {
        match command {
            SessionCommand::Go(path) => {
                let result = self.router.navigate(&path);
                self.follow(result, out)?;
            }
            SessionCommand::Open(href) => {
                let result = self.router.sync_location(&href);
                self.follow(result, out)?;
            }
            SessionCommand::Replace(path) => {
                let result = self.router.replace(&path);
                self.follow(result, out)?;
            }
            SessionCommand::Back => {
                if self.router.go_back() {
                    self.render(out)?;
                } else {
                    out.println("Nothing to go back to");
                }
            }
            SessionCommand::Forward => {
                if self.router.go_forward() {
                    self.render(out)?;
                } else {
                    out.println("Nothing to go forward to");
                }
            }
            SessionCommand::Where => match self.router.current_location() {
                Some(location) => out.println(format!(
                    "{} -> {}",
                    location,
                    self.router
                        .active_view()
                        .map(|v| v.to_string())
                        .unwrap_or_default()
                )),
                None => out.println("No active route"),
            },
            SessionCommand::Routes => {
                output_lines(out, &route_links(&self.router));
            }
            SessionCommand::New => {
                self.ctx.discard_puzzle();
                self.show_queens(out)?;
            }
            SessionCommand::Reveal => {
                self.ctx.reveal = true;
                self.show_queens(out)?;
            }
            SessionCommand::Help => {
                output_lines(out, &help_lines());
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Render after a navigation; unmatched paths keep the current view
    fn follow<T: OutputHandle>(
        &mut self,
        result: Result<AppView, RouterError>,
        out: &T,
    ) -> Result<()> {
        match result {
            Ok(view) => {
                info!(view = %view, "Activated view");
                self.render(out)
            }
            Err(error @ (RouterError::NotFound(_) | RouterError::ForeignLocation(_))) => {
                out.println(format!("{}", error));
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }

    fn show_queens<T: OutputHandle>(&mut self, out: &T) -> Result<()> {
        if self.router.active_view() == Some(AppView::Queens) {
            self.render(out)
        } else {
            let result = self.router.navigate("/queens");
            self.follow(result, out)
        }
    }
}

fn help_lines() -> Vec<String> {
    [
        "go <path>       navigate to a route (a bare /path works too)",
        "open <href>     navigate to an encoded location, e.g. #/home",
        "replace <path>  navigate without adding a history entry",
        "back, forward   move through history",
        "where           show the current location",
        "routes          list every route",
        "new             generate a new Queens board",
        "reveal          show the solution",
        "quit            leave the session",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

/// Start interactive mode
pub async fn interactive_command(loader: CliConfigLoader, colour: bool) -> Result<()> {
    let config = loader.load().await?;
    let out = StdoutHandle;
    let mut session = Session::new(&config, colour)?;
    session.render(&out)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        out.print("queens> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match SessionCommand::parse(&line) {
            Ok(Some(command)) => {
                if session.execute(command, &out)? == Flow::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(error) => out.println(error),
        }
    }

    info!(path = ?session.router().current_path(), "Session ended");
    Ok(())
}
