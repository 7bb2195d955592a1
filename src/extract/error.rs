//! Conversion errors.
//!
//! Every variant renders a user-facing message. Full context (the source
//! chain) is logged by the batch layer, not returned to callers.

use std::path::PathBuf;

/// Errors that end the conversion of one document.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read archive {}: {message}", .path.display())]
    ArchiveRead { path: PathBuf, message: String },

    #[error("No HTML content found in {}", .path.display())]
    NoContent { path: PathBuf },

    #[error("Failed to {operation} {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// `NoContent` is a status, not a failure of the tool itself.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConvertError::NoContent { .. })
    }
}
