//! Table-of-contents page detection.
//!
//! Navigation pages repeat every chapter title as link text. If their links
//! were extracted as prose the output would start with a second copy of the
//! whole outline, so such items are skipped entirely.
//!
//! The markers are CJK-specific: a chapter or volume link reads like
//! `第一章` ("chapter one") or `第二卷` ("volume two"). Documents in other
//! scripts are never flagged; later dedup passes catch most of their
//! navigation text instead.

use crate::markup::Fragment;

/// Ordinal prefix ("number ...") that opens a chapter or volume label.
const ORDINAL_PREFIX: char = '第';

/// Suffixes naming a volume or a chapter.
const SECTION_MARKERS: [char; 2] = ['卷', '章'];

/// Returns `true` if the fragment looks like a table-of-contents page.
///
/// A page qualifies when it has strictly more than `link_threshold` links
/// and at least one trimmed link text starts with `第` and contains `卷` or
/// `章`.
pub fn is_toc(fragment: &Fragment, link_threshold: usize) -> bool {
    let links = fragment.link_texts();
    if links.len() <= link_threshold {
        return false;
    }
    links.iter().any(|text| is_section_label(text))
}

fn is_section_label(text: &str) -> bool {
    text.starts_with(ORDINAL_PREFIX) && text.contains(&SECTION_MARKERS[..])
}
