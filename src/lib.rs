//! wlsync library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod jira;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use cli::parser::{Cli, Commands};
use config::RunConfig;
use errors::{AppError, AppResult};
use log::{LevelFilter, debug};
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(command: &Commands, cfg: &RunConfig) -> AppResult<()> {
    match command {
        Commands::Create => cli::commands::create::handle(cfg),
        Commands::Remove { .. } => cli::commands::remove::handle(cfg),
    }
}

/// Debug diagnostics go to stderr through env_logger. `RUST_LOG` is honored
/// unless `--debug` asks for everything.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            let name = match e.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(s)) => s.clone(),
                _ => String::new(),
            };
            return Err(AppError::UnknownCommand(name));
        }
        Err(e) => e.exit(),
    };
    init_logging(cli.debug);

    // 2️⃣ resolve the run configuration once
    let cfg = RunConfig::from_cli(&cli)?;
    debug!("Running '{}' with {:?}", cli.command.name(), cfg);

    if !cfg.mode.is_confirm() {
        warning("Dry run: not changing anything in Jira, just reporting what would be done. Pass --yes to apply.");
    }

    // 3️⃣ hand over to the command
    dispatch(&cli.command, &cfg)
}
