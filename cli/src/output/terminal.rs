//! Terminal output abstraction and formatting utilities
//!
//! Pages render into lines; this module writes them out and colours them.

use std::io::Write;

/// Trait to abstract over different output handles
pub trait OutputHandle {
    fn println<S: ToString>(&self, msg: S);
    fn print<S: ToString>(&self, msg: S);
}

/// Output handle writing to the process stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutHandle;

impl OutputHandle for StdoutHandle {
    fn println<S: ToString>(&self, msg: S) {
        println!("{}", msg.to_string());
    }

    fn print<S: ToString>(&self, msg: S) {
        print!("{}", msg.to_string());
        // A prompt without a newline must still reach the terminal
        let _ = std::io::stdout().flush();
    }
}

/// Write rendered page lines with an empty line before the block
pub fn output_lines<T: OutputHandle>(stdout: &T, lines: &[String]) -> usize {
    stdout.println("");
    for line in lines {
        stdout.println(line);
    }
    lines.len() + 1
}

/// Apply ANSI color formatting to text
pub fn apply_color(text: &str, color: AnsiColor) -> String {
    match color {
        AnsiColor::Gray => format!("\x1b[90m{}\x1b[0m", text),
        AnsiColor::Yellow => format!("\x1b[33m{}\x1b[0m", text),
        AnsiColor::Cyan => format!("\x1b[36m{}\x1b[0m", text),
    }
}

/// ANSI color codes for terminal output
#[derive(Debug, Clone, Copy)]
pub enum AnsiColor {
    Gray,
    Yellow,
    Cyan,
}

/// Apply RGB background formatting to text
pub fn apply_rgb_background(text: &str, (r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[48;2;{};{};{}m\x1b[30m{}\x1b[0m", r, g, b, text)
}

/// Region colours, cycled when a board has more regions than entries
const REGION_PALETTE: [(u8, u8, u8); 12] = [
    (187, 163, 221),
    (255, 201, 146),
    (150, 190, 255),
    (179, 223, 160),
    (223, 223, 223),
    (255, 123, 96),
    (230, 243, 136),
    (185, 178, 158),
    (223, 160, 191),
    (163, 210, 216),
    (98, 153, 129),
    (242, 214, 110),
];

/// Background colour for region `index`
pub fn region_colour(index: usize) -> (u8, u8, u8) {
    REGION_PALETTE[index % REGION_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock output handle for testing
    struct MockOutputHandle {
        pub output: std::sync::Mutex<Vec<String>>,
    }

    impl MockOutputHandle {
        fn new() -> Self {
            Self {
                output: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn get_output(&self) -> Vec<String> {
            self.output.lock().unwrap().clone()
        }
    }

    impl OutputHandle for MockOutputHandle {
        fn println<S: ToString>(&self, msg: S) {
            self.output.lock().unwrap().push(msg.to_string());
        }

        fn print<S: ToString>(&self, msg: S) {
            self.output.lock().unwrap().push(msg.to_string());
        }
    }

    #[test]
    fn test_output_lines() {
        let mock = MockOutputHandle::new();
        let lines = output_lines(&mock, &["one".to_string(), "two".to_string()]);

        assert_eq!(lines, 3);
        assert_eq!(mock.get_output(), vec!["", "one", "two"]);
    }

    #[test]
    fn test_apply_color() {
        let colored = apply_color("test", AnsiColor::Cyan);
        assert!(colored.contains("\x1b[36m"));
        assert!(colored.contains("\x1b[0m"));
    }

    #[test]
    fn test_region_colours_cycle() {
        assert_eq!(region_colour(0), region_colour(REGION_PALETTE.len()));
        assert_ne!(region_colour(0), region_colour(1));
        assert!(apply_rgb_background(" x ", region_colour(2)).contains("48;2;150;190;255"));
    }
}
