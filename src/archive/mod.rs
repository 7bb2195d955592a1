//! Archive reading.
//!
//! An archive is a packaged document: an ordered list of named content
//! items plus metadata. The conversion pipeline only talks to the
//! [`ArchiveSource`] trait; [`EpubArchive`] reads real EPUB files and
//! [`MemoryArchive`] serves items built in memory.

mod epub;
mod memory;

use std::path::Path;

use crate::extract::ConvertError;

pub use self::epub::EpubArchive;
pub use memory::MemoryArchive;

/// Media types treated as HTML-like content.
const DOCUMENT_MEDIA_TYPES: [&str; 2] = ["application/xhtml+xml", "text/html"];

/// Discriminates the items the pipeline processes from everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// HTML-like content (XHTML or HTML)
    Document,
    /// Anything else, with its media type
    Other(String),
}

impl ItemKind {
    pub fn from_media_type(media_type: &str) -> Self {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if DOCUMENT_MEDIA_TYPES.contains(&essence.as_str()) {
            ItemKind::Document
        } else {
            ItemKind::Other(essence)
        }
    }
}

/// One named fragment of a packaged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    /// Path inside the archive, used for diagnostics
    pub name: String,
    pub kind: ItemKind,
    /// Raw markup
    pub markup: String,
}

impl ContentItem {
    pub fn new(name: impl Into<String>, kind: ItemKind, markup: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            markup: markup.into(),
        }
    }

    /// Shorthand for an XHTML item.
    pub fn document(name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Document, markup)
    }

    pub fn is_document(&self) -> bool {
        self.kind == ItemKind::Document
    }
}

/// Source of a document's items and metadata.
pub trait ArchiveSource {
    /// Path of the archive on disk (or a label for in-memory sources).
    fn path(&self) -> &Path;

    /// First Dublin Core title, if any.
    fn title(&self) -> Option<String>;

    /// All items in reading order.
    fn items(&mut self) -> Result<Vec<ContentItem>, ConvertError>;

    /// Only the HTML-like items, in reading order.
    fn document_items(&mut self) -> Result<Vec<ContentItem>, ConvertError> {
        let mut items = self.items()?;
        items.retain(ContentItem::is_document);
        Ok(items)
    }
}
