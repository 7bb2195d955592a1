//! Rendering content units into a Markdown-flavored text stream.
//!
//! Every unit becomes its own blank-line separated block, except that
//! consecutive list items share one block. Top-level sections (heading
//! levels 1 and 2) are separated by a divider line.

use super::config::ExtractionConfig;
use super::types::ContentUnit;
use crate::markup::normalize_whitespace;

/// Shortest code fence.
const MIN_FENCE_LEN: usize = 3;

/// Renders an ordered unit sequence, tracking the current section.
pub struct Linearizer {
    divider: Option<String>,
    blocks: Vec<String>,
    current_section: Option<String>,
    last_was_list: bool,
}

impl Linearizer {
    /// Linearizer that inserts dividers between top-level sections.
    pub fn new(config: &ExtractionConfig) -> Self {
        Self::build(Some(config.divider()))
    }

    /// Linearizer that never inserts dividers.
    pub fn without_dividers() -> Self {
        Self::build(None)
    }

    fn build(divider: Option<String>) -> Self {
        Self {
            divider,
            blocks: Vec::new(),
            current_section: None,
            last_was_list: false,
        }
    }

    /// Emit the document title as a level-1 heading. Blank titles are ignored.
    pub fn title(&mut self, title: &str) {
        let title = normalize_whitespace(title);
        if !title.is_empty() {
            self.push_block(format!("# {title}"));
        }
    }

    /// Render one unit.
    pub fn push(&mut self, unit: &ContentUnit) {
        match unit {
            ContentUnit::Heading { level, text } => {
                if *level <= 2 {
                    self.enter_section(text);
                }
                let marker = "#".repeat(usize::from(*level));
                self.push_block(format!("{marker} {text}"));
            }
            ContentUnit::ListItem { text } => {
                let line = format!("- {text}");
                match self.blocks.last_mut() {
                    Some(block) if self.last_was_list => {
                        block.push('\n');
                        block.push_str(&line);
                    }
                    _ => self.blocks.push(line),
                }
                self.last_was_list = true;
            }
            ContentUnit::CodeBlock { text } => {
                let fence = fence_for(text);
                self.push_block(format!("{fence}\n{text}\n{fence}"));
            }
            ContentUnit::Paragraph { text } => {
                self.push_block(text.clone());
            }
        }
    }

    /// Emit a divider if `text` opens a new top-level section.
    fn enter_section(&mut self, text: &str) {
        if self.current_section.as_deref() == Some(text) {
            return;
        }
        if self.current_section.is_some() {
            if let Some(divider) = self.divider.clone() {
                self.push_block(divider);
            }
        }
        self.current_section = Some(text.to_string());
    }

    fn push_block(&mut self, block: String) {
        self.blocks.push(block);
        self.last_was_list = false;
    }

    /// Join the blocks with blank lines. Empty input renders as "".
    pub fn finish(self) -> String {
        if self.blocks.is_empty() {
            return String::new();
        }
        let mut text = self.blocks.join("\n\n");
        text.push('\n');
        text
    }

    /// Render a whole document in one call.
    pub fn render(title: Option<&str>, units: &[ContentUnit], config: &ExtractionConfig) -> String {
        let mut linearizer = Self::new(config);
        if let Some(title) = title {
            linearizer.title(title);
        }
        for unit in units {
            linearizer.push(unit);
        }
        linearizer.finish()
    }
}

/// A backtick fence longer than any backtick run inside `code`.
fn fence_for(code: &str) -> String {
    let longest = code
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest + 1).max(MIN_FENCE_LEN))
}
