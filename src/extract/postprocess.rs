//! Block-level deduplication of a rendered document.
//!
//! The rendered stream is split into blank-line delimited blocks. Headings
//! and dividers are structural and always kept. Prose blocks go through two
//! stages:
//!
//! 1. **Exact**: short blocks are dropped, then case-insensitive repeats
//!    (first occurrence wins)
//! 2. **Containment**: a block whose trimmed text is a strict substring of
//!    another surviving block is dropped
//!
//! Containment decisions are made against the full stage-1 survivor set, so
//! a block can serve as a container even if it is itself removed.

use std::collections::HashSet;

use super::config::ExtractionConfig;
use super::progress::{NoProgress, ProgressReporter, Stage};
use super::types::{BlockKind, ParagraphBlock, PostProcessStats};

/// Shortest backtick run that forms a code fence line.
const MIN_FENCE_LEN: usize = 3;

/// How many containment candidates to scan between progress callbacks.
const PROGRESS_INTERVAL: usize = 100;

/// Result of post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProcessOutput {
    pub text: String,
    pub stats: PostProcessStats,
}

/// Applies exact and containment dedup to a rendered document.
pub struct PostProcessor {
    min_block_chars: usize,
    divider_marker: String,
    containment: bool,
}

impl PostProcessor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            min_block_chars: config.min_block_chars,
            divider_marker: "-".repeat(config.divider_marker_run),
            containment: config.containment_dedup,
        }
    }

    /// Split on runs of two or more newlines.
    ///
    /// Newline runs inside a fenced code block do not split, so a code
    /// block with blank lines stays one block. A fence is a line made only
    /// of backticks, closed by the next line with the same backticks; an
    /// unmatched fence line is ordinary text.
    pub fn split_blocks(&self, text: &str) -> Vec<ParagraphBlock> {
        let spans = fence_spans(text);
        let bytes = text.as_bytes();
        let mut raws = Vec::new();
        let mut block_start = 0;
        let mut span = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'\n' {
                i += 1;
                continue;
            }
            let run_end = i + bytes[i..].iter().take_while(|&&b| b == b'\n').count();
            while span < spans.len() && spans[span].1 <= i {
                span += 1;
            }
            let fenced = spans.get(span).is_some_and(|&(start, _)| start <= i);
            if run_end - i >= 2 && !fenced {
                raws.push(&text[block_start..i]);
                block_start = run_end;
            }
            i = run_end;
        }
        raws.push(&text[block_start..]);

        raws.into_iter().map(|raw| self.block(raw)).collect()
    }

    fn block(&self, raw: &str) -> ParagraphBlock {
        let trimmed = raw.trim();
        let kind = if trimmed.starts_with('#') || trimmed.starts_with(&self.divider_marker) {
            BlockKind::Structural
        } else {
            BlockKind::Prose
        };
        ParagraphBlock {
            raw: raw.to_string(),
            kind,
        }
    }

    pub fn process(&self, text: &str) -> PostProcessOutput {
        self.process_with_progress(text, &NoProgress)
    }

    /// Run both stages, reporting containment-scan progress.
    pub fn process_with_progress(
        &self,
        text: &str,
        progress: &dyn ProgressReporter,
    ) -> PostProcessOutput {
        let blocks = self.split_blocks(text);
        let mut stats = PostProcessStats {
            total_blocks: blocks.len(),
            ..Default::default()
        };

        let survivors = self.exact_dedup(blocks, &mut stats);

        let keep = if self.containment {
            containment_scan(&survivors, progress)
        } else {
            vec![true; survivors.len()]
        };
        stats.contained = keep.iter().filter(|&&k| !k).count();

        let kept: Vec<&str> = survivors
            .iter()
            .zip(&keep)
            .filter(|&(_, &k)| k)
            .map(|(block, _)| block.raw.as_str())
            .collect();
        stats.kept_blocks = kept.len();

        PostProcessOutput {
            text: kept.join("\n\n"),
            stats,
        }
    }

    /// Stage 1: drop short prose blocks and case-insensitive repeats.
    fn exact_dedup(
        &self,
        blocks: Vec<ParagraphBlock>,
        stats: &mut PostProcessStats,
    ) -> Vec<ParagraphBlock> {
        let mut seen = HashSet::new();
        let mut survivors = Vec::with_capacity(blocks.len());

        for block in blocks {
            if block.is_structural() {
                survivors.push(block);
                continue;
            }

            let trimmed = block.trimmed();
            if trimmed.chars().count() < self.min_block_chars {
                stats.short_dropped += 1;
                continue;
            }
            if !seen.insert(trimmed.to_lowercase()) {
                stats.exact_duplicates += 1;
                continue;
            }
            survivors.push(block);
        }

        survivors
    }
}

/// Byte ranges `(start, end)` covered by matched fence pairs, in order.
fn fence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches('\n');
        lines.push((offset, offset + content.len(), content.trim()));
        offset += line.len();
    }

    let mut spans = Vec::new();
    let mut index = 0;
    while index < lines.len() {
        let (start, _, fence) = lines[index];
        if is_fence_line(fence) {
            if let Some(close) = (index + 1..lines.len()).find(|&j| lines[j].2 == fence) {
                spans.push((start, lines[close].1));
                index = close + 1;
                continue;
            }
        }
        index += 1;
    }
    spans
}

fn is_fence_line(line: &str) -> bool {
    line.len() >= MIN_FENCE_LEN && line.bytes().all(|b| b == b'`')
}

/// Stage 2: mark prose blocks contained in a strictly longer prose block.
///
/// A strict substring is always shorter, so candidates are ordered by
/// length and each block is compared only against longer ones. Returns one
/// keep flag per block.
fn containment_scan(blocks: &[ParagraphBlock], progress: &dyn ProgressReporter) -> Vec<bool> {
    let mut keep = vec![true; blocks.len()];

    let mut by_length: Vec<(usize, &str)> = blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| !block.is_structural())
        .map(|(index, block)| (index, block.trimmed()))
        .collect();
    by_length.sort_by_key(|(_, text)| text.len());

    let total = by_length.len();
    progress.stage_started(Stage::PostProcessing, total);

    for (position, &(index, text)) in by_length.iter().enumerate() {
        let longer_from = by_length.partition_point(|(_, other)| other.len() <= text.len());
        let contained = by_length[longer_from..]
            .iter()
            .any(|(_, other)| other.contains(text));
        if contained {
            keep[index] = false;
        }

        let done = position + 1;
        if done % PROGRESS_INTERVAL == 0 || done == total {
            progress.item_processed(Stage::PostProcessing, done, total, "containment scan");
        }
    }

    keep
}
