//! Writing and reading back converted documents.
//!
//! Two write modes exist. `Direct` overwrites the output path in place, so a
//! failure between the linearized write and the post-processed write leaves
//! the first version on disk. `Atomic` writes a sibling temp file and
//! renames it over the output.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::extract::ConvertError;

/// Fallback stem when the input path has none.
const FALLBACK_STEM: &str = "document";

/// How output files are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Overwrite the output path in place
    #[default]
    Direct,
    /// Write a temp file, then rename it over the output path
    Atomic,
}

/// Get the temp path used by atomic writes: the output path with `.tmp` appended.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

/// `<output_dir>/<input stem>.<extension>`.
pub fn output_path_for(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| OsStr::new(FALLBACK_STEM));
    let mut file_name = stem.to_owned();
    let extension = extension.trim_start_matches('.');
    if !extension.is_empty() {
        file_name.push(".");
        file_name.push(extension);
    }
    output_dir.join(file_name)
}

/// Write `text` to `path`, returning the number of bytes written.
pub fn write_text(path: &Path, text: &str, mode: WriteMode) -> Result<u64, ConvertError> {
    match mode {
        WriteMode::Direct => {
            fs::write(path, text).map_err(|e| ConvertError::io("write", path, e))?;
        }
        WriteMode::Atomic => {
            let temp_path = temp_path_for(path);
            fs::write(&temp_path, text).map_err(|e| ConvertError::io("write", &temp_path, e))?;
            if let Err(e) = fs::rename(&temp_path, path) {
                // Clean up temp file on failure
                let _ = fs::remove_file(&temp_path);
                return Err(ConvertError::io("replace", path, e));
            }
        }
    }
    Ok(text.len() as u64)
}

/// Read a previously written output file.
pub fn read_text(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|e| ConvertError::io("read back", path, e))
}
