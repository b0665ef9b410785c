//! Output handling for the CLI

pub mod terminal;

pub use terminal::{output_lines, OutputHandle, StdoutHandle};
