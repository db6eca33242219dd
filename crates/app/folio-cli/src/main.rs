use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
};

mod cli;
mod commands;
mod interactive;
mod settings;
mod signal;

use cli::{Cli, Command};
use settings::FileSettings;

/// Used when `RUST_LOG` is unset: the `folio` binary and the `folio_*` crates at info.
const DEFAULT_LOG_FILTER: &str = "warn,folio=info,folio_=info";

fn main() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into()) // anything not listed → WARN
        .with_env_var("RUST_LOG")
        .try_from_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let settings = FileSettings::load(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Capture(args)) => commands::capture(&args, &settings),
        Some(Command::Assemble(args)) => commands::assemble(&args, &settings),
        Some(Command::Keys) => {
            commands::list_keys();
            Ok(())
        }
        None => interactive::run(&settings),
    }
}
