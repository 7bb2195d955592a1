//! Data structures flowing through the extraction pipeline.

use serde::Serialize;

/// Lowest and highest heading levels (`h1`..`h6`).
pub const MIN_HEADING_LEVEL: u8 = 1;
pub const MAX_HEADING_LEVEL: u8 = 6;

/// One classified unit of document content.
///
/// Units are created once by the classifier and never mutated afterwards.
/// Heading, list and paragraph text is whitespace-collapsed; code text is
/// kept verbatim apart from surrounding blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentUnit {
    Heading { level: u8, text: String },
    ListItem { text: String },
    CodeBlock { text: String },
    Paragraph { text: String },
}

impl ContentUnit {
    /// Create a heading, clamping the level into `1..=6`.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ContentUnit::Heading {
            level: level.clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL),
            text: text.into(),
        }
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        ContentUnit::ListItem { text: text.into() }
    }

    pub fn code_block(text: impl Into<String>) -> Self {
        ContentUnit::CodeBlock { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentUnit::Paragraph { text: text.into() }
    }

    /// The unit's text as stored.
    pub fn text(&self) -> &str {
        match self {
            ContentUnit::Heading { text, .. }
            | ContentUnit::ListItem { text }
            | ContentUnit::CodeBlock { text }
            | ContentUnit::Paragraph { text } => text,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, ContentUnit::Heading { .. })
    }

    /// Key used for case-insensitive duplicate detection.
    ///
    /// Headings have no key: they are structural and never deduplicated.
    pub fn dedup_key(&self) -> Option<String> {
        match self {
            ContentUnit::Heading { .. } => None,
            ContentUnit::CodeBlock { text } => {
                Some(super::normalize_whitespace(text).to_lowercase())
            }
            ContentUnit::ListItem { text } | ContentUnit::Paragraph { text } => {
                Some(text.to_lowercase())
            }
        }
    }
}

/// Role of a blank-line delimited block during post-processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Heading line or section divider; always retained.
    Structural,
    /// Candidate for deduplication.
    Prose,
}

/// One block of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphBlock {
    /// Block text exactly as split from the stream.
    pub raw: String,
    pub kind: BlockKind,
}

impl ParagraphBlock {
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }

    pub fn is_structural(&self) -> bool {
        self.kind == BlockKind::Structural
    }
}

/// Counters collected while building the unit sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    /// Document items visited
    pub items: usize,
    /// Items flagged as tables of contents and skipped
    pub toc_items: usize,
    /// Items that produced at least one unit
    pub items_with_content: usize,
    /// Heading units emitted
    pub headings: usize,
    /// Non-heading units emitted
    pub body_units: usize,
    /// Non-heading units dropped as case-insensitive repeats
    pub duplicates_suppressed: usize,
}

impl CollectionStats {
    pub fn units(&self) -> usize {
        self.headings + self.body_units
    }
}

/// Result of post-processing a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostProcessStats {
    /// Blocks produced by the initial split
    pub total_blocks: usize,
    /// Blocks in the final output
    pub kept_blocks: usize,
    /// Empty or too-short prose blocks dropped
    pub short_dropped: usize,
    /// Prose blocks dropped as case-insensitive repeats
    pub exact_duplicates: usize,
    /// Prose blocks dropped because a longer block contains them
    pub contained: usize,
}

impl PostProcessStats {
    /// Blocks removed overall (`total_blocks - kept_blocks`).
    pub fn removed(&self) -> usize {
        self.total_blocks.saturating_sub(self.kept_blocks)
    }
}
