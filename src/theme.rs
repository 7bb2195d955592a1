//! ANSI color helpers for CLI output
//!
//! Colors are disabled when `NO_COLOR` is set or stdout is not a terminal.

use std::io::IsTerminal;

/// ANSI color codes for CLI output
pub mod ansi {
    /// Green color (ANSI 32) - used for success
    pub const GREEN: &str = "\x1b[32m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Yellow color (ANSI 33) - used for warnings
    pub const YELLOW: &str = "\x1b[33m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// Text styling for terminal output.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    colors: bool,
}

impl Theme {
    /// Detect color support from `NO_COLOR` and the stdout terminal.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            colors: !no_color && std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { colors: false }
    }

    pub fn colored() -> Self {
        Self { colors: true }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colors {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(ansi::GREEN, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(ansi::RED, text)
    }

    /// Format text with the warning color.
    pub fn warning_text(&self, text: &str) -> String {
        self.paint(ansi::YELLOW, text)
    }
}
