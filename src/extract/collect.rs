//! Cross-item collection with first-pass deduplication.

use std::collections::HashSet;

use tracing::debug;

use super::classify::classify;
use super::types::{CollectionStats, ContentUnit};
use crate::markup::Fragment;

/// Which units the collector refuses to repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Drop repeated non-heading units (case-insensitive); keep every heading.
    Prose,
    /// Drop repeated heading texts; keep all other units as found.
    Headings,
}

/// Accumulates the ordered unit sequence for one document.
///
/// One collector (and so one seen set) is created per document and
/// dropped when that document is done. Items are fed in archive order.
pub struct Collector {
    policy: DedupPolicy,
    min_chars: usize,
    seen: HashSet<String>,
    units: Vec<ContentUnit>,
    stats: CollectionStats,
}

impl Collector {
    /// Collector for the deduplicating pipeline.
    pub fn new(min_chars: usize) -> Self {
        Self::with_policy(DedupPolicy::Prose, min_chars)
    }

    pub fn with_policy(policy: DedupPolicy, min_chars: usize) -> Self {
        Self {
            policy,
            min_chars,
            seen: HashSet::new(),
            units: Vec::new(),
            stats: CollectionStats::default(),
        }
    }

    /// Record an item that was flagged as a table of contents.
    pub fn skip_toc_item(&mut self, name: &str) {
        debug!(item = name, "Skipping table of contents");
        self.stats.items += 1;
        self.stats.toc_items += 1;
    }

    /// Parse, clean and classify one item, then append its units.
    ///
    /// Returns the number of units appended.
    pub fn collect_item(&mut self, name: &str, markup: &str) -> usize {
        let mut fragment = Fragment::parse(markup);
        fragment.excise_non_content();
        let classified = classify(&mut fragment, self.min_chars);

        self.stats.items += 1;
        let mut appended = 0;
        for unit in classified {
            if self.push(unit) {
                appended += 1;
            }
        }
        if appended > 0 {
            self.stats.items_with_content += 1;
        }

        debug!(item = name, units = appended, "Collected item");
        appended
    }

    /// Append one unit unless the policy says it is a repeat.
    ///
    /// Returns `true` if the unit was appended.
    pub fn push(&mut self, unit: ContentUnit) -> bool {
        let key = match (self.policy, &unit) {
            (DedupPolicy::Prose, unit) => unit.dedup_key(),
            (DedupPolicy::Headings, ContentUnit::Heading { text, .. }) => Some(text.clone()),
            (DedupPolicy::Headings, _) => None,
        };

        if let Some(key) = key {
            if !self.seen.insert(key) {
                self.stats.duplicates_suppressed += 1;
                return false;
            }
        }

        if unit.is_heading() {
            self.stats.headings += 1;
        } else {
            self.stats.body_units += 1;
        }
        self.units.push(unit);
        true
    }

    pub fn units(&self) -> &[ContentUnit] {
        &self.units
    }

    pub fn stats(&self) -> &CollectionStats {
        &self.stats
    }

    /// Consume the collector, yielding the units and counters.
    pub fn finish(self) -> (Vec<ContentUnit>, CollectionStats) {
        (self.units, self.stats)
    }
}
