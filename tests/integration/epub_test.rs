//! Real EPUB containers read through the library API.

use std::fs;

use tempfile::TempDir;

use epubtxt::archive::{ArchiveSource, EpubArchive, ItemKind};
use epubtxt::convert::{convert_document, convert_single_pass, ConvertOptions};
use epubtxt::extract::{ConvertError, NoProgress};

use super::helpers::{sample_book, EpubBuilder, SAMPLE_BOOK_TEXT};

#[test]
fn title_comes_from_dublin_core_metadata() {
    let dir = TempDir::new().unwrap();
    let path = sample_book().write_in(dir.path(), "sample.epub");

    let archive = EpubArchive::open(&path).unwrap();
    assert_eq!(archive.title().as_deref(), Some("Sample Book"));
    assert_eq!(archive.path(), path.as_path());
}

#[test]
fn missing_title_is_none() {
    let dir = TempDir::new().unwrap();
    let path = EpubBuilder::new()
        .chapter("ch1.xhtml", "<p>Untitled content here</p>")
        .write_in(dir.path(), "untitled.epub");

    let archive = EpubArchive::open(&path).unwrap();
    assert_eq!(archive.title(), None);
}

#[test]
fn items_follow_spine_order() {
    let dir = TempDir::new().unwrap();
    let path = EpubBuilder::new()
        .chapter("b-first.xhtml", "<p>First in reading order</p>")
        .chapter("a-second.xhtml", "<p>Second in reading order</p>")
        .write_in(dir.path(), "order.epub");

    let mut archive = EpubArchive::open(&path).unwrap();
    let items = archive.document_items().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].name.ends_with("b-first.xhtml"));
    assert!(items[1].name.ends_with("a-second.xhtml"));
    assert!(items.iter().all(|item| item.kind == ItemKind::Document));
    assert!(items[0].markup.contains("First in reading order"));
}

#[test]
fn documents_outside_the_spine_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = EpubBuilder::new()
        .chapter("ch1.xhtml", "<p>Spine chapter text</p>")
        .unlisted("nav.xhtml", "<p>Navigation page text</p>")
        .write_in(dir.path(), "nav.epub");

    let mut archive = EpubArchive::open(&path).unwrap();
    let items = archive.document_items().unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].name.ends_with("ch1.xhtml"));
}

#[test]
fn non_zip_file_is_an_archive_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.epub");
    fs::write(&path, "definitely not a zip").unwrap();

    match EpubArchive::open(&path) {
        Err(err @ ConvertError::ArchiveRead { .. }) => {
            assert!(err.to_string().contains("broken.epub"));
            assert!(err.is_fatal());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected ArchiveRead error"),
    }
}

#[test]
fn full_pipeline_on_real_container() {
    let dir = TempDir::new().unwrap();
    let path = sample_book().write_in(dir.path(), "sample.epub");
    let output = dir.path().join("sample.txt");

    let mut archive = EpubArchive::open(&path).unwrap();
    let report =
        convert_document(&mut archive, &output, &ConvertOptions::default(), &NoProgress).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), SAMPLE_BOOK_TEXT);
    assert_eq!(report.sections(), 2);
    assert_eq!(report.collection.duplicates_suppressed, 1);
    assert_eq!(report.bytes_written, SAMPLE_BOOK_TEXT.len() as u64);
}

#[test]
fn single_pass_on_real_container() {
    let dir = TempDir::new().unwrap();
    let path = sample_book().write_in(dir.path(), "sample.epub");
    let output = dir.path().join("sample.txt");

    let mut archive = EpubArchive::open(&path).unwrap();
    convert_single_pass(&mut archive, &output, &ConvertOptions::default(), &NoProgress).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("# Sample Book\n\n# Chapter One\n"));
    assert_eq!(text.matches("Running header text").count(), 2);
    assert!(!text.contains("------"));
    assert!(text.ends_with("\n--- End of conversion ---\nProcessed 2 document sections\n"));
}
