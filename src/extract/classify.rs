//! Markup node classification.
//!
//! Turns one parsed content item into an ordered list of [`ContentUnit`]s.
//! Headings come first (all of them, in document order), followed by the
//! body candidates in document order.

use super::types::ContentUnit;
use crate::markup::{normalize_whitespace, Fragment};

/// Classify a fragment whose non-content nodes have already been excised.
///
/// **Rules**:
/// 1. Every non-empty heading yields a `Heading` unit
/// 2. Body candidates nested inside a heading are skipped
/// 3. Candidates shorter than `min_chars` characters (after whitespace
///    collapsing) are dropped
/// 4. `li` maps to `ListItem`, `pre`/`code` to `CodeBlock`, anything else
///    to `Paragraph`
///
/// If nothing matched, the headings are stripped and the remaining text is
/// split on blank lines into `Paragraph` units (same length filter).
pub fn classify(fragment: &mut Fragment, min_chars: usize) -> Vec<ContentUnit> {
    let mut units = Vec::new();

    for (level, raw) in fragment.headings() {
        let text = normalize_whitespace(&raw);
        if !text.is_empty() {
            units.push(ContentUnit::heading(level, text));
        }
    }

    for candidate in fragment.candidates() {
        if candidate.inside_heading {
            continue;
        }

        let text = normalize_whitespace(&candidate.text);
        if !long_enough(&text, min_chars) {
            continue;
        }

        let unit = match candidate.tag.as_str() {
            "li" => ContentUnit::list_item(text),
            "pre" | "code" => ContentUnit::code_block(trim_blank_lines(&candidate.text)),
            _ => ContentUnit::paragraph(text),
        };
        units.push(unit);
    }

    if units.is_empty() {
        units = fallback_paragraphs(fragment, min_chars);
    }

    units
}

fn fallback_paragraphs(fragment: &mut Fragment, min_chars: usize) -> Vec<ContentUnit> {
    fragment
        .text_without_headings()
        .iter()
        .map(|chunk| normalize_whitespace(chunk))
        .filter(|text| long_enough(text, min_chars))
        .map(ContentUnit::paragraph)
        .collect()
}

/// Non-empty and at least `min_chars` characters.
fn long_enough(text: &str, min_chars: usize) -> bool {
    !text.is_empty() && text.chars().count() >= min_chars
}

/// Drop whitespace-only lines at either end, keeping inner indentation.
fn trim_blank_lines(text: &str) -> &str {
    let mut start = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            start.get_or_insert(offset);
            end = offset + line.trim_end().len();
        }
        offset += line.len();
    }

    match start {
        Some(start) => &text[start..end],
        None => "",
    }
}
