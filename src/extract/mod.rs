//! Content extraction and deduplication pipeline.
//!
//! Walks every content item of a document, classifies each markup node into
//! a typed [`ContentUnit`], suppresses repeated prose and renders the
//! survivors into a Markdown-flavored text stream. A final pass over the
//! rendered stream removes duplicated and contained paragraph blocks.
//!
//! # Pipeline
//!
//! ```text
//! items -> toc (exclusions) -> collect (classify + first dedup)
//!       -> linearize (render) -> postprocess (block dedup) -> text
//! ```
//!
//! All mutable state (the seen set, the current section) lives in values
//! owned by a single document's run. Nothing is shared between documents.
//!
//! # Module Structure
//!
//! - [`toc`] - Table-of-contents page detection
//! - [`classify`] - Markup node to content unit classification
//! - [`collect`] - Cross-item collection with first-pass dedup
//! - [`linearize`] - Rendering units into a text stream
//! - [`postprocess`] - Block-level exact and containment dedup
//! - [`progress`] - Advisory progress reporting
//! - [`types`] - Data structures shared by the stages

pub mod classify;
pub mod collect;
pub mod config;
pub mod error;
pub mod linearize;
pub mod postprocess;
pub mod progress;
pub mod toc;
pub mod types;

pub use crate::markup::normalize_whitespace;
pub use classify::classify;
pub use collect::{Collector, DedupPolicy};
pub use config::ExtractionConfig;
pub use error::ConvertError;
pub use linearize::Linearizer;
pub use postprocess::{PostProcessOutput, PostProcessor};
pub use progress::{ConsoleProgress, NoProgress, ProgressReporter, Stage};
pub use toc::is_toc;
pub use types::{BlockKind, CollectionStats, ContentUnit, ParagraphBlock, PostProcessStats};
