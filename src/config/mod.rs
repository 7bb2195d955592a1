//! Configuration management for epubtxt

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::convert::ConvertOptions;
use crate::files::WriteMode;

impl Config {
    /// Get the config file path (~/.config/epubtxt/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/epubtxt)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load from `path` when given, otherwise from the default location
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => io::load_from(path),
            None => io::load(),
        }
    }

    /// Parse TOML configuration text
    pub fn parse(contents: &str) -> Result<Self> {
        io::parse(contents)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Expand ~ in output directory path
    pub fn output_directory(&self) -> PathBuf {
        let dir = &self.output.directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }

    /// Conversion options described by this configuration
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            extraction: self.extraction.clone(),
            write_mode: if self.output.atomic_writes {
                WriteMode::Atomic
            } else {
                WriteMode::Direct
            },
            single_pass: self.output.single_pass,
        }
    }
}
