//! CLI definitions for epubtxt
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Version string: the crate version, plus the git commit for dev builds.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Build clap styles.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "epubtxt")]
#[command(about = "Flatten EPUB books into deduplicated Markdown-flavored text")]
#[command(
    long_about = "epubtxt - Convert EPUB books into a single Markdown-flavored text file.

Every chapter is classified into headings, paragraphs, list items and code
blocks. Repeated front matter, running headers and inline tables of contents
are removed, and top-level sections are separated by divider lines.

QUICK START:
    epubtxt convert book.epub              Write ./book.txt
    epubtxt convert *.epub -o texts/       Convert many books into texts/
    epubtxt config show                    Show the effective configuration

Configuration is read from ~/.config/epubtxt/config.toml when present."
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this configuration file instead of ~/.config/epubtxt/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert EPUB files to text
    #[command(long_about = "Convert one or more EPUB files to Markdown-flavored text.

Files are processed one at a time in the order given. Each book is written to
<DIR>/<name>.txt. A book that fails to convert is reported and skipped; the
remaining books are still converted. The exit code is 1 if any book failed.

By default every book goes through the full deduplication pipeline:
table-of-contents pages are skipped, repeated paragraphs are dropped, and
paragraphs contained in a longer paragraph are removed.

EXAMPLES:
    epubtxt convert book.epub                    Write ./book.txt
    epubtxt convert a.epub b.epub -o out/        Write out/a.txt and out/b.txt
    epubtxt convert book.epub --single-pass      Faster, no deduplication
    epubtxt convert book.epub --atomic           Replace output via temp file
    epubtxt convert book.epub --json             Print a JSON summary")]
    Convert(ConvertArgs),

    /// Configuration management
    #[command(subcommand)]
    #[command(long_about = "View and create the epubtxt configuration file.

The configuration file is optional. Missing values use built-in defaults.
Location: ~/.config/epubtxt/config.toml (or the path given by --config).

EXAMPLES:
    epubtxt config show          Print the effective configuration
    epubtxt config path          Print the config file location
    epubtxt config init          Write a config file with all defaults")]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script on stdout.

EXAMPLES:
    epubtxt completions --shell bash > ~/.local/share/bash-completion/completions/epubtxt
    epubtxt completions --shell zsh > ~/.zfunc/_epubtxt")]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

/// Arguments of `epubtxt convert`.
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// EPUB files to convert
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Output directory (default: config output.directory, then ".")
    #[arg(long, short, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Render once without table-of-contents detection or deduplication
    #[arg(long)]
    pub single_pass: bool,

    /// Write through a temp file and rename it over the output
    #[arg(long)]
    pub atomic: bool,

    /// Keep paragraphs that are contained in longer paragraphs
    #[arg(long)]
    pub no_containment: bool,

    /// Suppress the progress line
    #[arg(long, short)]
    pub quiet: bool,

    /// Print the batch summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Values missing from the config file are shown with their defaults.

EXAMPLE:
    epubtxt config show")]
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file containing the defaults
    #[command(long_about = "Write a configuration file containing every setting
with its default value. An existing file is left untouched unless --force
is given.

EXAMPLE:
    epubtxt config init")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
