//! Performance tests for whole-document conversion.

use std::time::Instant;

use tempfile::TempDir;

use epubtxt::archive::MemoryArchive;
use epubtxt::convert::{convert_document, ConvertOptions};
use epubtxt::extract::NoProgress;

use super::helpers::chapter;

#[test]
fn large_book_converts_quickly() {
    let mut archive = MemoryArchive::new("large.epub").with_title("Large");
    for index in 0..200 {
        archive = archive.with_document(format!("ch{index}.xhtml"), chapter(index, 20));
    }
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("large.txt");

    let start = Instant::now();
    let report =
        convert_document(&mut archive, &output, &ConvertOptions::default(), &NoProgress).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(report.sections(), 200);
    assert_eq!(report.collection.duplicates_suppressed, 199);
    assert_eq!(report.collection.headings, 200);
    assert!(elapsed.as_secs() < 20, "conversion took {:?}", elapsed);
}
