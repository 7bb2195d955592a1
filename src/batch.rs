//! Multi-document conversion.
//!
//! Documents are converted one at a time in list order. Each document gets
//! a fresh pipeline; a failure is recorded and logged but never stops the
//! batch.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::archive::EpubArchive;
use crate::convert::{convert_document, convert_single_pass, ConversionReport, ConvertOptions};
use crate::extract::{ConvertError, ProgressReporter};
use crate::files::output_path_for;

/// Extension used for output files when none is configured.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Result of converting one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub success: bool,
    /// Human-readable status line
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ConversionReport>,
}

/// Result of a whole batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub outcomes: Vec<DocumentOutcome>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Final status line for the batch.
    pub fn message(&self) -> String {
        if self.all_succeeded() {
            format!("All {} files converted successfully", self.succeeded)
        } else {
            format!(
                "Completed with {} successes and {} failures",
                self.succeeded, self.failed
            )
        }
    }

    fn record(&mut self, outcome: DocumentOutcome) {
        if outcome.success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }
}

/// Convert every input into `<output_dir>/<stem>.<extension>`.
pub fn convert_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    extension: &str,
    options: &ConvertOptions,
    progress: &dyn ProgressReporter,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for (index, input) in inputs.iter().enumerate() {
        let output = output_path_for(input, output_dir, extension);
        info!(
            input = %input.display(),
            output = %output.display(),
            "[{}/{}] Converting",
            index + 1,
            inputs.len()
        );

        let outcome = match convert_one(input, output_dir, &output, options, progress) {
            Ok(report) => DocumentOutcome {
                input: input.clone(),
                output: output.clone(),
                success: true,
                message: report.summary(),
                report: Some(report),
            },
            Err(err) => {
                if err.is_fatal() {
                    error!(input = %input.display(), error = ?err, "Conversion failed");
                } else {
                    warn!(input = %input.display(), "{}", err);
                }
                DocumentOutcome {
                    input: input.clone(),
                    output: output.clone(),
                    success: false,
                    message: err.to_string(),
                    report: None,
                }
            }
        };

        progress.document_finished(input, outcome.success, &outcome.message);
        summary.record(outcome);
    }

    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Batch finished"
    );
    summary
}

fn convert_one(
    input: &Path,
    output_dir: &Path,
    output: &Path,
    options: &ConvertOptions,
    progress: &dyn ProgressReporter,
) -> Result<ConversionReport, ConvertError> {
    fs::create_dir_all(output_dir)
        .map_err(|e| ConvertError::io("create directory", output_dir, e))?;

    let mut archive = EpubArchive::open(input)?;
    if options.single_pass {
        convert_single_pass(&mut archive, output, options, progress)
    } else {
        convert_document(&mut archive, output, options, progress)
    }
}
