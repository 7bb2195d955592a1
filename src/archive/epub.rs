use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ::epub::doc::EpubDoc;
use tracing::{debug, warn};

use super::{ArchiveSource, ContentItem, ItemKind};
use crate::extract::ConvertError;

/// EPUB file read through the `epub` crate.
///
/// Items are produced in spine (reading) order. Manifest documents that
/// the spine does not reference, such as an EPUB 3 `nav.xhtml` kept out of
/// the reading order, are never read.
pub struct EpubArchive {
    path: PathBuf,
    doc: EpubDoc<BufReader<File>>,
}

impl EpubArchive {
    /// Open and parse the container. Corrupt or non-EPUB files fail here.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let doc = EpubDoc::new(path).map_err(|e| ConvertError::ArchiveRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }
}

impl ArchiveSource for EpubArchive {
    fn path(&self) -> &Path {
        &self.path
    }

    fn title(&self) -> Option<String> {
        self.doc
            .mdata("title")
            .map(|item| item.value.trim().to_string())
            .filter(|title| !title.is_empty())
    }

    fn items(&mut self) -> Result<Vec<ContentItem>, ConvertError> {
        let count = self.doc.get_num_chapters();
        let mut items = Vec::with_capacity(count);

        for index in 0..count {
            if !self.doc.set_current_chapter(index) {
                warn!(index, path = %self.path.display(), "Spine entry out of range");
                continue;
            }

            let name = self
                .doc
                .get_current_path()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("spine[{index}]"));

            match self.doc.get_current_str() {
                Some((markup, mime)) => {
                    debug!(item = %name, mime = %mime, "Read spine item");
                    items.push(ContentItem::new(name, ItemKind::from_media_type(&mime), markup));
                }
                None => warn!(item = %name, "Spine item is missing or not UTF-8, skipping"),
            }
        }

        Ok(items)
    }
}
