//! rCheckin library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod importer;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use utils::path::{config_dir, resolve_in};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Search { .. } | Commands::Show { .. } => {
            cli::commands::search::handle(&cli.command, cfg)
        }
        Commands::CheckIn { .. } | Commands::Undo { .. } => {
            cli::commands::checkin::handle(&cli.command, cfg)
        }
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ logging
    logging::setup_logging(cli.verbose, &cfg.log_level);

    // 4️⃣ applica eventuale override del DB da riga di comando
    //    (stessa risoluzione di `init`: un nome semplice finisce nella config dir)
    if let Some(custom_db) = &cli.db {
        cfg.database = resolve_in(&config_dir(), custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 5️⃣ passa tutto al dispatcher
    let result = dispatch(&cli, &cfg);

    if let Err(e @ (AppError::Db(_) | AppError::Io(_) | AppError::Migration(_))) = &result {
        tracing::error!(error = %e, database = %cfg.database, "Storage failure");
    }

    result
}
