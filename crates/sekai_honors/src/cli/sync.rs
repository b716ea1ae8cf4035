//! Sync command handler.

use super::connect;
use sekai_honors::{
    HonorsConfig, HonorsResult, HonorsSyncer, HttpMasterdataSource, PostgresHonorStore, Server,
    SyncReport, run_migrations,
};

/// Sync the chosen servers. Returns `false` if any entity type failed.
pub async fn handle_sync(
    config: &HonorsConfig,
    database_url: &str,
    servers: Vec<Server>,
    all: bool,
) -> HonorsResult<bool> {
    let servers = if all {
        Server::all()
    } else if !servers.is_empty() {
        servers
    } else {
        config.default_servers()?
    };

    let mut conn = connect(database_url)?;
    let applied = run_migrations(&mut conn)?;
    if applied > 0 {
        tracing::info!(applied, "Applied pending migrations");
    }

    let source = HttpMasterdataSource::new(&config.sync)?;
    let syncer = HonorsSyncer::new(source);
    let mut store = PostgresHonorStore::new(&mut conn);

    tracing::info!(servers = ?servers, "Starting honor sync");
    let reports = syncer.run_all(&mut store, &servers).await;

    for report in &reports {
        summarize(report);
    }

    Ok(reports.iter().all(SyncReport::is_success))
}

fn summarize(report: &SyncReport) {
    for outcome in &report.outcomes {
        if let Some(error) = &outcome.log_error {
            tracing::error!(
                server = %report.server,
                sync_type = %outcome.sync_type,
                error = %error,
                "Sync log entry was not written"
            );
        }
        match &outcome.error {
            None => tracing::info!(
                server = %report.server,
                sync_type = %outcome.sync_type,
                records = outcome.record_count,
                "Synced"
            ),
            Some(error) => tracing::error!(
                server = %report.server,
                sync_type = %outcome.sync_type,
                error = %error,
                "Sync failed"
            ),
        }
    }

    tracing::info!(
        server = %report.server,
        name = report.server.display_name(),
        total = report.total_records(),
        success = report.is_success(),
        "Server sync complete"
    );
}
