//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the sekai-honors binary.

mod commands;
mod query;
mod sync;

pub use commands::{Cli, Commands};

use sekai_honors::{HonorsConfig, HonorsResult, PgConnection, establish_connection_to};

/// Execute the parsed command. Returns `false` when a sync run reported failures.
pub async fn run(cli: Cli) -> HonorsResult<bool> {
    let config = HonorsConfig::load()?;
    let database_url = match cli.database_url {
        Some(url) => url,
        None => config.database_url()?,
    };

    match cli.command {
        Commands::Migrate => {
            let mut conn = connect(&database_url)?;
            let applied = sekai_honors::run_migrations(&mut conn)?;
            tracing::info!(applied, "Migrations complete");
            Ok(true)
        }
        Commands::Sync { servers, all } => {
            sync::handle_sync(&config, &database_url, servers, all).await
        }
        Commands::Honors(cmd) => query::handle_honors(&database_url, cmd).map(|_| true),
        Commands::Bonds(cmd) => query::handle_bonds(&database_url, cmd).map(|_| true),
        Commands::Groups(cmd) => query::handle_groups(&database_url, cmd).map(|_| true),
        Commands::Logs {
            server,
            sync_type,
            limit,
            format,
        } => query::handle_logs(&database_url, server, sync_type, limit, format).map(|_| true),
    }
}

fn connect(database_url: &str) -> HonorsResult<PgConnection> {
    Ok(establish_connection_to(database_url)?)
}
