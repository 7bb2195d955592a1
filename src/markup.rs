//! Markup parsing for content fragments.
//!
//! Wraps a `scraper` (html5ever) document with the handful of queries the
//! extraction pipeline needs: find-all-by-tag, text extraction, a parent
//! chain check and in-place node removal.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use scraper::{ElementRef, Html, Node, Selector};

/// Heading elements, `h1` through `h6`.
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements whose text is considered body content.
pub const CANDIDATE_TAGS: [&str; 10] = [
    "p",
    "div",
    "span",
    "li",
    "td",
    "th",
    "a",
    "blockquote",
    "pre",
    "code",
];

/// Elements that never carry readable content.
pub const NON_CONTENT_TAGS: [&str; 5] = ["script", "style", "meta", "link", "noscript"];

/// HTML void elements; a trailing `/>` on these is already a complete tag.
const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// XML-style self-closing tag: name, attributes (quoted values may hold `/` or `>`), `/>`.
static SELF_CLOSING_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<([A-Za-z][A-Za-z0-9:_.-]*)((?:\s+[^\s=/>"']+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>/]+))?)*)\s*/>"#,
    )
    .expect("self-closing tag pattern is valid")
});

static HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| selector_for(&HEADING_TAGS));
static CANDIDATE_SELECTOR: Lazy<Selector> = Lazy::new(|| selector_for(&CANDIDATE_TAGS));
static NON_CONTENT_SELECTOR: Lazy<Selector> = Lazy::new(|| selector_for(&NON_CONTENT_TAGS));
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| selector_for(&["a"]));

fn selector_for(tags: &[&str]) -> Selector {
    Selector::parse(&tags.join(", ")).expect("tag list is a valid selector")
}

/// A body element found by [`Fragment::candidates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateElement {
    /// Lowercase tag name
    pub tag: String,
    /// Concatenated descendant text, untouched
    pub text: String,
    /// Whether any ancestor is a heading element
    pub inside_heading: bool,
}

/// A parsed content fragment.
pub struct Fragment {
    html: Html,
}

impl Fragment {
    /// Parse raw markup. html5ever recovers from malformed input, so this
    /// never fails.
    ///
    /// XHTML self-closing tags on non-void elements (`<a id="x"/>`) are
    /// expanded first; the HTML parser would otherwise leave them open
    /// around the rest of the body.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(&expand_self_closing(markup)),
        }
    }

    /// Trimmed text of every hyperlink, in document order.
    pub fn link_texts(&self) -> Vec<String> {
        self.html
            .select(&LINK_SELECTOR)
            .map(|link| element_text(&link).trim().to_string())
            .collect()
    }

    /// Remove script/style/meta/link/noscript nodes. Returns how many were removed.
    pub fn excise_non_content(&mut self) -> usize {
        self.excise(&NON_CONTENT_SELECTOR)
    }

    /// Detach every element matching `selector` (with its subtree).
    pub fn excise(&mut self, selector: &Selector) -> usize {
        let ids: Vec<_> = self.html.select(selector).map(|el| el.id()).collect();
        let mut removed = 0;
        for id in ids {
            if let Some(mut node) = self.html.tree.get_mut(id) {
                node.detach();
                removed += 1;
            }
        }
        removed
    }

    /// Heading elements as `(level, raw text)`, in document order.
    pub fn headings(&self) -> Vec<(u8, String)> {
        self.html
            .select(&HEADING_SELECTOR)
            .filter_map(|el| heading_level(el.value().name()).map(|level| (level, element_text(&el))))
            .collect()
    }

    /// Candidate body elements, in document order.
    pub fn candidates(&self) -> Vec<CandidateElement> {
        self.html
            .select(&CANDIDATE_SELECTOR)
            .map(|el| CandidateElement {
                tag: el.value().name().to_string(),
                text: element_text(&el),
                inside_heading: has_heading_ancestor(&el),
            })
            .collect()
    }

    /// Remove all headings and return the remaining text, one entry per
    /// blank-line separated chunk of each text node.
    pub fn text_without_headings(&mut self) -> Vec<String> {
        self.excise(&HEADING_SELECTOR);
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) => Some(text.to_string()),
                _ => None,
            })
            .flat_map(|text| {
                split_blank_lines(&text)
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Rewrite `<tag .../>` as `<tag ...></tag>` for every non-void element.
pub fn expand_self_closing(markup: &str) -> Cow<'_, str> {
    SELF_CLOSING_TAG.replace_all(markup, |caps: &Captures<'_>| {
        let name = &caps[1];
        if VOID_TAGS.contains(&name.to_ascii_lowercase().as_str()) {
            caps[0].to_string()
        } else {
            format!("<{}{}></{}>", name, &caps[2], name)
        }
    })
}

/// Level of a heading tag name (`"h3"` -> 3).
pub fn heading_level(tag: &str) -> Option<u8> {
    if !HEADING_TAGS.contains(&tag) {
        return None;
    }
    tag[1..].parse().ok()
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

fn has_heading_ancestor(el: &ElementRef<'_>) -> bool {
    el.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|parent| HEADING_TAGS.contains(&parent.name()))
    })
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text on blank lines, dropping empty chunks. Chunks are trimmed.
pub fn split_blank_lines(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                chunks.push(text[s..end].trim());
            }
        } else {
            if start.is_none() {
                start = Some(offset);
            }
            end = offset + line.len();
        }
        offset += line.len();
    }
    if let Some(s) = start {
        chunks.push(text[s..end].trim());
    }

    chunks.retain(|chunk| !chunk.is_empty());
    chunks
}
