//! epubtxt - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use epubtxt::cli::{Cli, Commands, ConfigCommands};
use epubtxt::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config path` and `config init` must work before a config file exists
    let config = match &cli.command {
        Commands::Config(ConfigCommands::Path | ConfigCommands::Init { .. })
        | Commands::Completions { .. } => Config::default(),
        _ => Config::load_or_default(cli.config.as_deref())?,
    };
    logging::init(&config.logging.level, cli.verbose)?;

    match cli.command {
        Commands::Convert(args) => {
            if !commands::convert::handle(&args, &config)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
            ConfigCommands::Init { force } => {
                commands::config::handle_init(cli.config.as_deref(), force)
            }
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
