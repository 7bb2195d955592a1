//! `epubtxt config` subcommands.

use std::fs;

use epubtxt::Config;

use super::helpers::{run_epubtxt, workspace};

#[test]
fn path_defaults_to_home_config_dir() {
    let home = workspace();
    let (stdout, _, exit_code) = run_epubtxt(home.path(), &["config", "path"]);
    assert_eq!(exit_code, 0);
    let expected = home.path().join(".config").join("epubtxt").join("config.toml");
    assert_eq!(stdout.trim(), expected.to_str().unwrap());
}

#[test]
fn path_honors_explicit_config() {
    let home = workspace();
    let (stdout, _, exit_code) =
        run_epubtxt(home.path(), &["config", "path", "--config", "/tmp/custom.toml"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "/tmp/custom.toml");
}

#[test]
fn init_writes_defaults_and_refuses_to_overwrite() {
    let home = workspace();
    let path = home.path().join(".config").join("epubtxt").join("config.toml");

    let (stdout, _, exit_code) = run_epubtxt(home.path(), &["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Wrote default config"));
    let written = Config::parse(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());

    let (_, stderr, exit_code) = run_epubtxt(home.path(), &["config", "init"]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("already exists"));

    let (_, _, exit_code) = run_epubtxt(home.path(), &["config", "init", "--force"]);
    assert_eq!(exit_code, 0);
}

#[test]
fn init_creates_explicit_path() {
    let home = workspace();
    let path = home.path().join("custom").join("epubtxt.toml");
    let (_, stderr, exit_code) = run_epubtxt(
        home.path(),
        &["config", "init", "--config", path.to_str().unwrap()],
    );
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(path.exists());
}

#[test]
fn show_merges_file_over_defaults() {
    let home = workspace();
    let config_dir = home.path().join(".config").join("epubtxt");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[extraction]\nmin_fragment_chars = 12\n",
    )
    .unwrap();

    let (stdout, _, exit_code) = run_epubtxt(home.path(), &["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("min_fragment_chars = 12"));
    assert!(stdout.contains("divider_width = 40"));
    assert!(stdout.contains("[output]"));
}

#[test]
fn invalid_config_is_reported() {
    let home = workspace();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[extraction]\ndivider_width = 2\n").unwrap();

    let (_, stderr, exit_code) = run_epubtxt(
        home.path(),
        &["config", "show", "--config", path.to_str().unwrap()],
    );
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Failed to parse config file"));
}
