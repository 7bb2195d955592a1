//! epubtxt library
//!
//! Converts EPUB archives into a single Markdown-flavored text stream,
//! keeping the heading hierarchy and removing duplicated prose.
//!
//! ```no_run
//! use epubtxt::archive::EpubArchive;
//! use epubtxt::convert::{convert_document, ConvertOptions};
//! use epubtxt::extract::NoProgress;
//! use std::path::Path;
//!
//! let mut book = EpubArchive::open(Path::new("book.epub"))?;
//! let report = convert_document(&mut book, Path::new("book.txt"), &ConvertOptions::default(), &NoProgress)?;
//! println!("{}", report.summary());
//! # Ok::<(), epubtxt::extract::ConvertError>(())
//! ```

pub mod archive;
pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod extract;
pub mod files;
pub mod logging;
pub mod markup;
pub mod theme;

pub use archive::{ArchiveSource, ContentItem, EpubArchive, ItemKind, MemoryArchive};
pub use batch::{convert_batch, BatchSummary, DocumentOutcome};
pub use config::Config;
pub use convert::{convert_document, convert_single_pass, ConversionReport, ConvertOptions};
pub use extract::{ContentUnit, ConvertError, ExtractionConfig};
