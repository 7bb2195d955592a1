//! Convert command handler

use anyhow::Result;
use std::path::PathBuf;

use epubtxt::batch::{convert_batch, BatchSummary};
use epubtxt::cli::ConvertArgs;
use epubtxt::convert::ConvertOptions;
use epubtxt::extract::ConsoleProgress;
use epubtxt::files::WriteMode;
use epubtxt::theme::Theme;
use epubtxt::Config;

/// Merge CLI flags over the configuration.
///
/// Returns the conversion options and the output directory.
pub fn resolve_options(args: &ConvertArgs, config: &Config) -> (ConvertOptions, PathBuf) {
    let mut options = config.convert_options();
    if args.single_pass {
        options.single_pass = true;
    }
    if args.atomic {
        options.write_mode = WriteMode::Atomic;
    }
    if args.no_containment {
        options.extraction.containment_dedup = false;
    }
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_directory());
    (options, output_dir)
}

/// Convert all files. Returns `Ok(false)` if any document failed.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ConvertArgs, config: &Config) -> Result<bool> {
    let (options, output_dir) = resolve_options(args, config);
    let progress = if args.quiet || args.json {
        ConsoleProgress::quiet()
    } else {
        ConsoleProgress::new()
    };

    let summary = convert_batch(
        &args.files,
        &output_dir,
        &config.output.extension,
        &options,
        &progress,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary, &Theme::detect()));
    }

    Ok(summary.all_succeeded())
}

/// Per-document status lines followed by the batch result.
pub fn format_summary(summary: &BatchSummary, theme: &Theme) -> String {
    let mut out = String::new();
    for outcome in &summary.outcomes {
        let line = if outcome.success {
            format!(
                "{} {} -> {} ({})",
                theme.success_text("Converted"),
                outcome.input.display(),
                outcome.output.display(),
                outcome.message
            )
        } else {
            format!(
                "{} {}: {}",
                theme.error_text("Failed"),
                outcome.input.display(),
                outcome.message
            )
        };
        out.push_str(&line);
        out.push('\n');
    }

    let result = summary.message();
    let result = if summary.all_succeeded() {
        theme.success_text(&result)
    } else {
        theme.warning_text(&result)
    };
    out.push_str(&result);
    out.push('\n');
    out
}
