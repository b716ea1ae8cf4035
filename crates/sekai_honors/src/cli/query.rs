//! Read-only query command handlers.

use super::commands::{BondsCommands, GroupsCommands, HonorsCommands, OutputFormat};
use super::connect;
use sekai_honors::{
    BondsHonorFilter, BondsHonorRepository, DatabaseError, DatabaseErrorKind, HonorFilter,
    HonorGroupFilter, HonorRepository, HonorsResult, JsonError, PostgresHonorStore, Server,
    SyncLogRepository, SyncType,
};
use serde::Serialize;

/// Handle `honors` subcommands.
pub fn handle_honors(database_url: &str, cmd: HonorsCommands) -> HonorsResult<()> {
    let mut conn = connect(database_url)?;
    let mut store = PostgresHonorStore::new(&mut conn);

    match cmd {
        HonorsCommands::List {
            server,
            group,
            rarity,
            limit,
            format,
        } => {
            let mut filter = HonorFilter::default();
            if let Some(group) = group {
                filter = filter.with_group_id(group);
            }
            if let Some(rarity) = rarity {
                filter = filter.with_rarity(rarity);
            }
            if let Some(limit) = limit {
                filter = filter.with_limit(limit);
            }

            let honors = store.list_honors_with_group(server, &filter)?;
            match format {
                OutputFormat::Json => print_json(&honors)?,
                OutputFormat::Human => {
                    println!("Honors on {} ({}):", server, server.display_name());
                    println!("{:-<80}", "");
                    for honor in &honors {
                        println!(
                            "{:>8}  {:<32} {:<8} {}",
                            honor.honor_id,
                            honor.name,
                            honor.honor_rarity.as_deref().unwrap_or("-"),
                            honor
                                .group_name
                                .as_deref()
                                .or(honor.honor_group_name.as_deref())
                                .unwrap_or("-"),
                        );
                    }
                    println!("{:-<80}", "");
                    println!("Total: {} honors", honors.len());
                }
            }
        }
        HonorsCommands::Show { server, id } => {
            let honor = store
                .get_honor_with_group(server, id)?
                .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound))?;
            print_json(&honor)?;
        }
    }

    Ok(())
}

/// Handle `bonds` subcommands.
pub fn handle_bonds(database_url: &str, cmd: BondsCommands) -> HonorsResult<()> {
    let mut conn = connect(database_url)?;
    let mut store = PostgresHonorStore::new(&mut conn);

    match cmd {
        BondsCommands::List {
            server,
            group,
            character,
            rarity,
            limit,
            format,
        } => {
            let mut filter = BondsHonorFilter::default();
            if let Some(group) = group {
                filter = filter.with_bonds_group_id(group);
            }
            if let Some(character) = character {
                filter = filter.with_character_unit_id(character);
            }
            if let Some(rarity) = rarity {
                filter = filter.with_rarity(rarity);
            }
            if let Some(limit) = limit {
                filter = filter.with_limit(limit);
            }

            let honors = store.list_bonds_honors(server, &filter)?;
            match format {
                OutputFormat::Json => print_json(&honors)?,
                OutputFormat::Human => {
                    println!("Bonds honors on {} ({}):", server, server.display_name());
                    println!("{:-<80}", "");
                    for honor in &honors {
                        println!(
                            "{:>8}  {:<32} {:<8} {} & {}",
                            honor.bonds_honor_id,
                            honor.name,
                            honor.honor_rarity.as_deref().unwrap_or("-"),
                            format_id(honor.game_character_unit_id1),
                            format_id(honor.game_character_unit_id2),
                        );
                    }
                    println!("{:-<80}", "");
                    println!("Total: {} bonds honors", honors.len());
                }
            }
        }
        BondsCommands::Show { server, id } => {
            let honor = store
                .get_bonds_honor(server, id)?
                .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound))?;
            print_json(&honor)?;
        }
    }

    Ok(())
}

/// Handle `groups` subcommands.
pub fn handle_groups(database_url: &str, cmd: GroupsCommands) -> HonorsResult<()> {
    let mut conn = connect(database_url)?;
    let mut store = PostgresHonorStore::new(&mut conn);

    match cmd {
        GroupsCommands::List {
            server,
            honor_type,
            format,
        } => {
            let mut filter = HonorGroupFilter::default();
            if let Some(honor_type) = honor_type {
                filter = filter.with_honor_type(honor_type);
            }

            let groups = store.list_honor_groups(server, &filter)?;
            match format {
                OutputFormat::Json => print_json(&groups)?,
                OutputFormat::Human => {
                    println!("Honor groups on {} ({}):", server, server.display_name());
                    println!("{:-<80}", "");
                    for group in &groups {
                        println!(
                            "{:>8}  {:<40} {}",
                            group.group_id,
                            group.name,
                            group.honor_type.as_deref().unwrap_or("-"),
                        );
                    }
                    println!("{:-<80}", "");
                    println!("Total: {} groups", groups.len());
                }
            }
        }
    }

    Ok(())
}

/// Show the most recent sync runs.
pub fn handle_logs(
    database_url: &str,
    server: Option<Server>,
    sync_type: Option<SyncType>,
    limit: i64,
    format: OutputFormat,
) -> HonorsResult<()> {
    let mut conn = connect(database_url)?;
    let mut store = PostgresHonorStore::new(&mut conn);

    let logs = store.recent_sync_logs(server, sync_type, limit)?;
    match format {
        OutputFormat::Json => print_json(&logs)?,
        OutputFormat::Human => {
            println!("Recent sync runs:");
            println!("{:-<80}", "");
            for log in &logs {
                let status = if log.success { "ok" } else { "FAILED" };
                println!(
                    "{}  {:<4} {:<14} {:>6}  {}",
                    log.synced_at.format("%Y-%m-%d %H:%M:%S"),
                    log.server,
                    log.sync_type,
                    log.record_count,
                    status,
                );
                if let Some(message) = &log.error_message {
                    println!("    {}", message);
                }
            }
            println!("{:-<80}", "");
            println!("Total: {} runs", logs.len());
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> HonorsResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn format_id(id: Option<i32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}
