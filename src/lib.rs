//! rcheckin library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! store / resolver modules for embedding and tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::attendance;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::resolver::StatusResolver;
pub use crate::db::{DbPool, EventStore};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Checkin {
            first_name,
            last_name,
        } => attendance::checkin(cfg, first_name, last_name),
        Commands::Checkout {
            first_name,
            last_name,
            id,
        } => attendance::checkout(cfg, first_name.as_deref(), last_name.as_deref(), *id),
        Commands::Roster => attendance::roster(cfg),
        Commands::Status {
            first_name,
            last_name,
        } => attendance::status(cfg, first_name, last_name),
        Commands::Recent => attendance::recent(cfg),
        Commands::Log {
            first_name,
            last_name,
            action,
            limit,
        } => attendance::log(
            cfg,
            first_name.as_ref(),
            last_name.as_ref(),
            action.as_ref(),
            *limit,
        ),
        Commands::Audit => cli::commands::audit::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed down explicitly
    let mut cfg = Config::load()?;

    // relative paths resolve against the config dir, as in `init`
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
