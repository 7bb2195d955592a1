//! Document-level behavior of the conversion pipeline.

use epubtxt::archive::MemoryArchive;
use epubtxt::convert::ConvertOptions;
use epubtxt::extract::{Collector, ContentUnit, PostProcessor};
use epubtxt::ExtractionConfig;

use super::helpers::{convert, convert_with, TOC_PAGE};

#[test]
fn toc_page_with_volume_markers_is_excluded() {
    let mut archive = MemoryArchive::new("book.epub")
        .with_document("toc.xhtml", TOC_PAGE)
        .with_document("c1.xhtml", "<h1>第一卷</h1><p>正文从这里开始，内容足够长。</p>");

    let (text, report) = convert(&mut archive);

    assert!(!text.contains("引言"));
    assert!(!text.contains("目录"));
    assert!(!text.contains("后记"));
    assert!(text.contains("正文从这里开始"));
    assert_eq!(report.collection.toc_items, 1);
    assert_eq!(report.collection.items, 2);
}

#[test]
fn link_heavy_page_without_markers_is_kept() {
    let links: String = (1..=8)
        .map(|i| format!("<li><a href='{i}'>Chapter number {i}</a></li>"))
        .collect();
    let mut archive =
        MemoryArchive::new("book.epub").with_document("index.xhtml", format!("<ul>{links}</ul>"));

    let (text, report) = convert(&mut archive);
    assert_eq!(report.collection.toc_items, 0);
    assert!(text.contains("- Chapter number 1\n"));
    assert!(text.contains("- Chapter number 8"));
}

#[test]
fn repeated_paragraph_across_items_is_emitted_once() {
    let mut archive = MemoryArchive::new("book.epub")
        .with_document("a.xhtml", "<p>Hello world, this is a test.</p>")
        .with_document("b.xhtml", "<p>hello WORLD, this is a test.</p>");

    let (text, report) = convert(&mut archive);
    assert_eq!(text, "Hello world, this is a test.\n");
    assert_eq!(report.collection.body_units, 1);
}

#[test]
fn shorter_block_inside_longer_block_is_removed() {
    let output = PostProcessor::new(&ExtractionConfig::default())
        .process("intro text here\n\nintro text here and more context");
    assert_eq!(output.text, "intro text here and more context");
    assert_eq!(output.stats.contained, 1);
}

#[test]
fn untitled_document_starts_with_content() {
    let mut archive = MemoryArchive::new("book.epub")
        .with_document("a.xhtml", "<h2>Prologue</h2><p>Before anything else happened.</p>");

    let (text, _) = convert(&mut archive);
    assert!(text.starts_with("## Prologue\n\n"));
    assert!(!text.starts_with("# "));
}

#[test]
fn divider_separates_top_level_sections_only() {
    let mut archive = MemoryArchive::new("book.epub")
        .with_title("Book")
        .with_document(
            "a.xhtml",
            "<h1>Part One</h1><h3>Scene</h3><p>The first part begins here.</p>",
        )
        .with_document("b.xhtml", "<h2>Part Two</h2><p>The second part begins here.</p>");

    let (text, _) = convert(&mut archive);
    let divider = "-".repeat(40);
    assert_eq!(text.matches(&divider).count(), 1);
    let divider_at = text.find(&divider).unwrap();
    assert!(text.find("### Scene").unwrap() < divider_at);
    assert!(text.find("## Part Two").unwrap() > divider_at);
}

#[test]
fn script_and_style_text_never_reaches_output() {
    let mut archive = MemoryArchive::new("book.epub").with_document(
        "a.xhtml",
        "<head><style>p { color: red; }</style></head>\
         <body><script>var hidden = 'do not show';</script>\
         <p>Only the visible paragraph.</p></body>",
    );

    let (text, _) = convert(&mut archive);
    assert_eq!(text, "Only the visible paragraph.\n");
}

#[test]
fn code_blocks_are_fenced_and_keep_indentation() {
    let mut archive = MemoryArchive::new("book.epub").with_document(
        "a.xhtml",
        "<p>Consider the following program.</p><pre>fn main() {\n    run();\n}</pre>",
    );

    let (text, _) = convert(&mut archive);
    assert!(text.contains("```\nfn main() {\n    run();\n}\n```"));
}

#[test]
fn disabling_containment_keeps_contained_paragraphs() {
    let mut archive = MemoryArchive::new("book.epub").with_document(
        "a.xhtml",
        "<p>The quick brown fox jumps over the lazy dog.</p><p>quick brown fox</p>",
    );
    let mut options = ConvertOptions::default();
    options.extraction.containment_dedup = false;

    let (text, report) = convert_with(&mut archive, &options);
    assert!(text.contains("quick brown fox\n"));
    assert_eq!(report.post_process.unwrap().contained, 0);
}

#[test]
fn short_fragments_are_filtered_by_character_count() {
    let mut collector = Collector::new(5);
    collector.collect_item("a.xhtml", "<p>abcd</p><p>abcde</p><p>四个汉字</p><p>五个汉字啊</p>");
    assert_eq!(
        collector.units(),
        &[ContentUnit::paragraph("abcde"), ContentUnit::paragraph("五个汉字啊")]
    );
}

#[test]
fn post_processing_is_idempotent_on_converted_output() {
    let mut archive = MemoryArchive::new("book.epub")
        .with_title("Idempotent")
        .with_document(
            "a.xhtml",
            "<h1>One</h1><p>A paragraph that stands on its own.</p>\
             <p>stands on its own</p><ul><li>list entry one</li><li>list entry two</li></ul>",
        );

    let (text, _) = convert(&mut archive);
    let again = PostProcessor::new(&ExtractionConfig::default()).process(&text);
    assert_eq!(again.text, text);
    assert_eq!(again.stats.removed(), 0);
}

#[test]
fn backticks_in_a_paragraph_leave_dedup_working() {
    let mut archive = MemoryArchive::new("book.epub").with_document(
        "a.xhtml",
        "<p>```rust is how markdown opens a fence</p><p>Repeated paragraph text</p>\
         <p>Other words</p><p>Repeated paragraph</p>",
    );

    let (text, report) = convert(&mut archive);
    assert_eq!(
        text,
        "```rust is how markdown opens a fence\n\nRepeated paragraph text\n\nOther words"
    );
    assert_eq!(report.post_process.unwrap().contained, 1);
}

#[test]
fn backticks_in_preformatted_text_leave_dedup_working() {
    let mut archive = MemoryArchive::new("book.epub").with_document(
        "a.xhtml",
        "<pre>```python</pre><p>Alpha beta gamma delta</p><p>Alpha beta gamma</p>",
    );

    let (text, _) = convert(&mut archive);
    assert_eq!(text, "````\n```python\n````\n\nAlpha beta gamma delta");
}

#[test]
fn self_closing_anchor_keeps_paragraphs_separate() {
    let mut archive = MemoryArchive::new("book.epub").with_document(
        "a.xhtml",
        "<?xml version='1.0' encoding='utf-8'?>\
         <html xmlns='http://www.w3.org/1999/xhtml'><body><a id='top'/><h1>Title</h1>\
         <p>First paragraph here.</p><p>Second paragraph here.</p></body></html>",
    );

    let (text, _) = convert(&mut archive);
    assert_eq!(text, "# Title\n\nFirst paragraph here.\n\nSecond paragraph here.\n");
}

#[test]
fn multi_line_title_renders_as_one_heading() {
    let mut archive = MemoryArchive::new("book.epub")
        .with_title("The\n\nLong   Title")
        .with_document("a.xhtml", "<p>Body text of the book.</p>");

    let (text, _) = convert(&mut archive);
    assert_eq!(text, "# The Long Title\n\nBody text of the book.\n");
}
