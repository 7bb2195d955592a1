//! Output file helpers.

mod output;

pub use output::{output_path_for, read_text, temp_path_for, write_text, WriteMode};
