//! leaveplanner library root.
//! Exposes the CLI parser, the high-level run() function and the planning core.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
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
        None | Some(Commands::Session) => cli::commands::session::handle(cfg),
        Some(Commands::Schedule) => cli::commands::schedule::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    utils::logging::init();

    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(roster) = &cli.roster {
        cfg.roster_file = roster.clone();
    }

    dispatch(&cli, &cfg)
}
