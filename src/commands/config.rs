//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use epubtxt::theme::Theme;
use epubtxt::Config;

/// Resolve the config file path: `--config` if given, else the default.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", render(config)?);
    Ok(())
}

/// Render a configuration as pretty TOML.
pub fn render(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(explicit)?.display());
    Ok(())
}

/// Write a default configuration file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let theme = Theme::detect();
    let path = resolve_path(explicit)?;
    write_default(&path, force)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}

/// Write `Config::default()` to `path`, refusing to overwrite unless `force`.
pub fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)
}
