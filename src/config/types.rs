//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::extract::ExtractionConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how converted documents are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory (`~/` is expanded)
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Output file extension
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Write each pass to a temp file and rename it over the output
    #[serde(default)]
    pub atomic_writes: bool,
    /// Use the single-pass converter instead of the deduplicating pipeline
    #[serde(default)]
    pub single_pass: bool,
}

pub fn default_directory() -> String {
    ".".to_string()
}

pub fn default_extension() -> String {
    crate::batch::DEFAULT_EXTENSION.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            atomic_writes: false,
            single_pass: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
