use std::path::{Path, PathBuf};

use super::{ArchiveSource, ContentItem};
use crate::extract::ConvertError;

/// Archive assembled in memory, for library callers and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    path: PathBuf,
    title: Option<String>,
    items: Vec<ContentItem>,
}

impl MemoryArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_item(mut self, item: ContentItem) -> Self {
        self.items.push(item);
        self
    }

    /// Append an XHTML item.
    pub fn with_document(self, name: impl Into<String>, markup: impl Into<String>) -> Self {
        self.with_item(ContentItem::document(name, markup))
    }
}

impl ArchiveSource for MemoryArchive {
    fn path(&self) -> &Path {
        &self.path
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn items(&mut self) -> Result<Vec<ContentItem>, ConvertError> {
        Ok(self.items.clone())
    }
}
