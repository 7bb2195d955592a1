//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use epubtxt::archive::MemoryArchive;
use epubtxt::convert::{convert_document, ConversionReport, ConvertOptions};
use epubtxt::extract::NoProgress;

/// Table-of-contents page with six links, one carrying a volume marker.
pub const TOC_PAGE: &str = "<h1>目录</h1><ul>\
    <li><a href='c1.xhtml'>第一卷 引言</a></li>\
    <li><a href='c2.xhtml'>第二卷 发展</a></li>\
    <li><a href='c3.xhtml'>第三卷 高潮</a></li>\
    <li><a href='c4.xhtml'>第四卷 转折</a></li>\
    <li><a href='c5.xhtml'>第五卷 结局</a></li>\
    <li><a href='c6.xhtml'>后记 说明</a></li></ul>";

/// Run the full pipeline into a temp file and return the written text.
pub fn convert_with(
    archive: &mut MemoryArchive,
    options: &ConvertOptions,
) -> (String, ConversionReport) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("book.txt");
    let report = convert_document(archive, &output, options, &NoProgress)
        .expect("Conversion failed");
    (read(&output), report)
}

/// Run the full pipeline with default options.
pub fn convert(archive: &mut MemoryArchive) -> (String, ConversionReport) {
    convert_with(archive, &ConvertOptions::default())
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read output")
}
