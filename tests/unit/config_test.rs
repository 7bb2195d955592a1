//! Configuration parsing as seen by library callers.

use epubtxt::files::WriteMode;
use epubtxt::Config;

#[test]
fn empty_file_is_all_defaults() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn unknown_sections_are_ignored() {
    let config = Config::parse("[player]\nspeed = 2.0\n").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn extraction_thresholds_flow_into_options() {
    let config = Config::parse(
        r#"
[output]
atomic_writes = true

[extraction]
min_fragment_chars = 20
toc_link_threshold = 10
"#,
    )
    .unwrap();

    let options = config.convert_options();
    assert_eq!(options.write_mode, WriteMode::Atomic);
    assert_eq!(options.extraction.min_fragment_chars, 20);
    assert_eq!(options.extraction.toc_link_threshold, 10);
    assert_eq!(options.extraction.min_block_chars, 10);
}

#[test]
fn wrong_types_are_rejected() {
    assert!(Config::parse("[extraction]\nmin_fragment_chars = \"many\"\n").is_err());
}
