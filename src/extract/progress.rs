//! Progress reporting for document conversion.
//!
//! Progress is advisory: the pipeline calls the reporter after each item
//! (and periodically during the containment scan) but never waits on it.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use unicode_width::UnicodeWidthChar;

/// Pipeline stage being reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Table-of-contents detection pass
    Analyzing,
    /// Classification and first-pass dedup
    Collecting,
    /// Block-level dedup of the rendered stream
    PostProcessing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Analyzing => "Analyzing",
            Stage::Collecting => "Collecting from",
            Stage::PostProcessing => "Post-processing",
        };
        f.write_str(label)
    }
}

/// Receives progress callbacks from the pipeline.
///
/// Every method has an empty default so implementations only override the
/// events they care about.
pub trait ProgressReporter {
    /// A stage is about to process `total` items.
    fn stage_started(&self, _stage: Stage, _total: usize) {}

    /// Item `index` (1-based) of `total` was processed.
    fn item_processed(&self, _stage: Stage, _index: usize, _total: usize, _name: &str) {}

    /// A document finished, successfully or not.
    fn document_finished(&self, _path: &Path, _success: bool, _message: &str) {}
}

/// Reporter that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {}

/// Maximum display width of an item name in the progress line.
const NAME_WIDTH: usize = 40;

/// Reporter that rewrites a single status line on stderr.
pub struct ConsoleProgress {
    /// Whether to show output (disabled for quiet mode)
    show_output: bool,
    /// Whether a progress line is currently on screen
    line_open: AtomicBool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            show_output: true,
            line_open: AtomicBool::new(false),
        }
    }

    /// Create a reporter with output disabled.
    pub fn quiet() -> Self {
        Self {
            show_output: false,
            line_open: AtomicBool::new(false),
        }
    }

    fn clear_line(&self) {
        if self.line_open.swap(false, Ordering::SeqCst) {
            eprint!("\r{:width$}\r", "", width = NAME_WIDTH + 40);
            let _ = io::stderr().flush();
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn stage_started(&self, _stage: Stage, _total: usize) {
        if self.show_output {
            self.clear_line();
        }
    }

    fn item_processed(&self, stage: Stage, index: usize, total: usize, name: &str) {
        if !self.show_output {
            return;
        }
        self.clear_line();
        eprint!(
            "\r  [{}/{}] {}: {}",
            index,
            total,
            stage,
            truncate_to_width(name, NAME_WIDTH)
        );
        let _ = io::stderr().flush();
        self.line_open.store(true, Ordering::SeqCst);
    }

    fn document_finished(&self, _path: &Path, _success: bool, _message: &str) {
        if self.show_output {
            self.clear_line();
        }
    }
}

/// Truncate to a terminal display width, marking the cut with `...`.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let width: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if width <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
