//! Configuration for the content extraction pipeline.

use serde::{Deserialize, Serialize};

/// Thresholds and switches for extraction and deduplication.
///
/// Every field has a default, so a config file only needs the values it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum characters for a non-heading fragment to be kept
    pub min_fragment_chars: usize,
    /// An item needs strictly more links than this to be checked for TOC markers
    pub toc_link_threshold: usize,
    /// Number of `-` characters in a section divider
    pub divider_width: usize,
    /// Minimum trimmed characters for a prose block to survive post-processing
    pub min_block_chars: usize,
    /// Run of `-` characters that marks a block as a divider
    pub divider_marker_run: usize,
    /// Remove prose blocks that are strict substrings of other blocks
    pub containment_dedup: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_fragment_chars: 5,
            toc_link_threshold: 5,
            divider_width: 40,
            min_block_chars: 10,
            divider_marker_run: 10,
            containment_dedup: true,
        }
    }
}

impl ExtractionConfig {
    /// Reject values that would make the pipeline degenerate.
    pub fn validate(&self) -> Result<(), String> {
        if self.divider_width < self.divider_marker_run {
            return Err(format!(
                "extraction.divider_width ({}) must be at least extraction.divider_marker_run ({}) \
                 or dividers would not be recognized as structural",
                self.divider_width, self.divider_marker_run
            ));
        }
        if self.divider_marker_run == 0 {
            return Err("extraction.divider_marker_run must be positive".to_string());
        }
        Ok(())
    }

    /// The divider line emitted between top-level sections.
    pub fn divider(&self) -> String {
        "-".repeat(self.divider_width)
    }
}
