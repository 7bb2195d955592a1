//! Per-document conversion entry points.
//!
//! [`convert_document`] runs the full deduplicating pipeline and rewrites
//! the output after post-processing. [`convert_single_pass`] renders once,
//! without table-of-contents detection or prose dedup, and appends a short
//! summary footer.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::archive::{ArchiveSource, ContentItem};
use crate::extract::{
    is_toc, CollectionStats, Collector, ConvertError, DedupPolicy, ExtractionConfig, Linearizer,
    PostProcessStats, PostProcessor, ProgressReporter, Stage,
};
use crate::files::{read_text, write_text, WriteMode};
use crate::markup::Fragment;

/// Options shared by every document of a run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub extraction: ExtractionConfig,
    pub write_mode: WriteMode,
    /// Use [`convert_single_pass`] instead of the deduplicating pipeline
    pub single_pass: bool,
}

/// What happened to one document.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: Option<String>,
    pub collection: CollectionStats,
    /// Absent for single-pass conversions
    pub post_process: Option<PostProcessStats>,
    pub bytes_written: u64,
}

impl ConversionReport {
    /// Items that yielded at least one unit.
    pub fn sections(&self) -> usize {
        self.collection.items_with_content
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        let size = humansize::format_size(self.bytes_written, humansize::BINARY);
        match &self.post_process {
            Some(stats) => format!(
                "{} sections, {} duplicate paragraphs removed ({})",
                self.sections(),
                stats.removed(),
                size
            ),
            None => format!("Processed {} document sections ({})", self.sections(), size),
        }
    }
}

/// Convert one document with full deduplication.
///
/// The output is written twice: once after linearization and again after
/// post-processing. With [`WriteMode::Direct`] a failure between the two
/// writes leaves the first version on disk.
pub fn convert_document(
    source: &mut dyn ArchiveSource,
    output: &Path,
    options: &ConvertOptions,
    progress: &dyn ProgressReporter,
) -> Result<ConversionReport, ConvertError> {
    let config = &options.extraction;
    let items = document_items(source)?;
    let total = items.len();
    info!(input = %source.path().display(), items = total, "Converting document");

    let toc_flags = detect_toc_items(&items, config, progress);

    let mut collector = Collector::new(config.min_fragment_chars);
    progress.stage_started(Stage::Collecting, total);
    for (index, (item, &toc)) in items.iter().zip(&toc_flags).enumerate() {
        if toc {
            collector.skip_toc_item(&item.name);
        } else {
            collector.collect_item(&item.name, &item.markup);
        }
        progress.item_processed(Stage::Collecting, index + 1, total, &item.name);
    }
    let (units, collection) = collector.finish();
    debug!(
        units = collection.units(),
        suppressed = collection.duplicates_suppressed,
        "Collection finished"
    );

    let title = source.title();
    let rendered = Linearizer::render(title.as_deref(), &units, config);
    write_text(output, &rendered, options.write_mode)?;

    let written = read_text(output)?;
    let processed = PostProcessor::new(config).process_with_progress(&written, progress);
    let bytes_written = write_text(output, &processed.text, options.write_mode)?;
    info!(
        output = %output.display(),
        removed = processed.stats.removed(),
        "Post-processing finished"
    );

    Ok(ConversionReport {
        input: source.path().to_path_buf(),
        output: output.to_path_buf(),
        title,
        collection,
        post_process: Some(processed.stats),
        bytes_written,
    })
}

/// Convert one document in a single pass.
///
/// Every item is classified and rendered in order. Only repeated heading
/// texts are suppressed; there is no table-of-contents detection, no
/// minimum fragment length beyond non-empty, and no post-processing.
pub fn convert_single_pass(
    source: &mut dyn ArchiveSource,
    output: &Path,
    options: &ConvertOptions,
    progress: &dyn ProgressReporter,
) -> Result<ConversionReport, ConvertError> {
    let items = document_items(source)?;
    let total = items.len();
    info!(input = %source.path().display(), items = total, "Converting document (single pass)");

    let mut collector = Collector::with_policy(DedupPolicy::Headings, 1);
    progress.stage_started(Stage::Collecting, total);
    for (index, item) in items.iter().enumerate() {
        collector.collect_item(&item.name, &item.markup);
        progress.item_processed(Stage::Collecting, index + 1, total, &item.name);
    }
    let (units, collection) = collector.finish();

    let title = source.title();
    let mut linearizer = Linearizer::without_dividers();
    if let Some(title) = &title {
        linearizer.title(title);
    }
    for unit in &units {
        linearizer.push(unit);
    }

    let mut text = linearizer.finish();
    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str(&summary_footer(collection.items_with_content));

    let bytes_written = write_text(output, &text, options.write_mode)?;

    Ok(ConversionReport {
        input: source.path().to_path_buf(),
        output: output.to_path_buf(),
        title,
        collection,
        post_process: None,
        bytes_written,
    })
}

/// Footer closing a single-pass conversion.
pub fn summary_footer(sections: usize) -> String {
    format!("--- End of conversion ---\nProcessed {sections} document sections\n")
}

fn document_items(source: &mut dyn ArchiveSource) -> Result<Vec<ContentItem>, ConvertError> {
    let items = source.document_items()?;
    if items.is_empty() {
        return Err(ConvertError::NoContent {
            path: source.path().to_path_buf(),
        });
    }
    Ok(items)
}

/// First pass: flag items that look like a table of contents.
fn detect_toc_items(
    items: &[ContentItem],
    config: &ExtractionConfig,
    progress: &dyn ProgressReporter,
) -> Vec<bool> {
    let total = items.len();
    progress.stage_started(Stage::Analyzing, total);

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let fragment = Fragment::parse(&item.markup);
            let toc = is_toc(&fragment, config.toc_link_threshold);
            if toc {
                warn!(item = %item.name, "Table of contents detected, excluding item");
            }
            progress.item_processed(Stage::Analyzing, index + 1, total, &item.name);
            toc
        })
        .collect()
}
