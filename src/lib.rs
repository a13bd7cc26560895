//! rfidattend library root.
//! Exposes the CLI parser, the high-level run() function and the attendance
//! session core (roster, reconciler, arrival feeds, summary).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Classes { .. } => cli::commands::classes::handle(&cli.command, cfg),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --data overrides the dataset for this run
    let mut cfg = Config::load()?;
    if let Some(custom) = &cli.data {
        cfg.data_file = Some(custom.clone());
    }

    dispatch(&cli, &cfg)
}
