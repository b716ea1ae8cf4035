//! Runs a full masterdata sync for one server.

use crate::{
    MasterBondsHonor, MasterHonor, MasterHonorGroup, MasterdataSource, SyncOutcome, SyncReport,
    SyncTarget, decode_records,
};
use sekai_honors_core::{Server, SyncType};
use sekai_honors_database::NewSyncLogRow;
use sekai_honors_error::DatabaseError;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{error, info, instrument, warn};

/// Syncs honor groups, honors and bonds honors from a masterdata source.
///
/// Groups go first so honors can carry the group name fetched in the same
/// run. Each entity type gets its own transaction and its own sync log row.
pub struct HonorsSyncer<S> {
    source: S,
}

impl<S: MasterdataSource> HonorsSyncer<S> {
    /// Create a syncer reading from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Sync every entity type for one server.
    ///
    /// Failures are recorded in the sync log and the report, never returned.
    #[instrument(skip(self, target), fields(server = %server))]
    pub async fn run<T: SyncTarget>(&self, target: &mut T, server: Server) -> SyncReport {
        info!(display_name = server.display_name(), "Starting honors sync");

        let groups = self
            .fetch_rows(server, SyncType::HonorGroups, |g: MasterHonorGroup| g.into_row(server))
            .await;
        let group_names: HashMap<i32, String> = match &groups {
            Ok(rows) => rows.iter().map(|g| (g.group_id, g.name.clone())).collect(),
            Err(_) => HashMap::new(),
        };
        let groups = groups.and_then(|rows| store(target.upsert_honor_groups(&rows)));
        let groups = record(target, server, SyncType::HonorGroups, groups);

        let honors = self
            .fetch_rows(server, SyncType::Honors, |h: MasterHonor| {
                h.into_row(server, &group_names)
            })
            .await
            .and_then(|rows| store(target.upsert_honors(&rows)));
        let honors = record(target, server, SyncType::Honors, honors);

        let bonds = self
            .fetch_rows(server, SyncType::BondsHonors, |b: MasterBondsHonor| {
                b.into_row(server)
            })
            .await
            .and_then(|rows| store(target.upsert_bonds_honors(&rows)));
        let bonds = record(target, server, SyncType::BondsHonors, bonds);

        let report = SyncReport {
            server,
            outcomes: vec![groups, honors, bonds],
        };

        if report.is_success() {
            info!(
                honor_groups = count_of(&report, SyncType::HonorGroups),
                honors = count_of(&report, SyncType::Honors),
                bonds_honors = count_of(&report, SyncType::BondsHonors),
                "Sync completed"
            );
        } else {
            warn!("Sync finished with failures");
        }

        report
    }

    /// Sync several servers one after another.
    pub async fn run_all<T: SyncTarget>(&self, target: &mut T, servers: &[Server]) -> Vec<SyncReport> {
        let mut reports = Vec::with_capacity(servers.len());
        for &server in servers {
            reports.push(self.run(target, server).await);
        }
        reports
    }

    async fn fetch_rows<M, R, F>(
        &self,
        server: Server,
        sync_type: SyncType,
        convert: F,
    ) -> Result<Vec<R>, String>
    where
        M: serde::de::DeserializeOwned,
        F: Fn(M) -> Result<R, DatabaseError>,
    {
        let payload: Value = self
            .source
            .fetch(server, sync_type.masterdata_file())
            .await
            .map_err(|e| e.kind.to_string())?;

        decode_records::<M>(sync_type, payload)
            .map_err(|e| e.kind.to_string())?
            .into_iter()
            .map(|m| convert(m).map_err(|e| e.kind.to_string()))
            .collect()
    }
}

fn store(result: Result<usize, DatabaseError>) -> Result<usize, String> {
    result.map_err(|e| e.kind.to_string())
}

fn count_of(report: &SyncReport, sync_type: SyncType) -> usize {
    report.outcome(sync_type).map_or(0, |o| o.record_count)
}

/// Append the sync log row for one entity type and build its outcome.
///
/// A count that does not fit the log's integer column fails the type rather
/// than being clamped. A log row that cannot be written fails the outcome too.
fn record<T: SyncTarget>(
    target: &mut T,
    server: Server,
    sync_type: SyncType,
    result: Result<usize, String>,
) -> SyncOutcome {
    let result = result.and_then(|count| {
        i32::try_from(count)
            .map(|logged| (count, logged))
            .map_err(|_| format!("record count {} does not fit the sync log", count))
    });

    let entry = match &result {
        Ok((count, logged)) => {
            info!(%sync_type, count, "Synced {} for {}", sync_type, server);
            NewSyncLogRow::succeeded(server, sync_type, *logged)
        }
        Err(message) => {
            error!(%sync_type, error = %message, "Sync of {} failed for {}", sync_type, server);
            NewSyncLogRow::failed(server, sync_type, message)
        }
    };

    let log_error = target.append_sync_log(&entry).err().map(|e| {
        error!(%sync_type, error = %e, "Could not write sync log entry");
        e.kind.to_string()
    });

    match result {
        Ok((record_count, _)) => SyncOutcome {
            sync_type,
            record_count,
            error: None,
            log_error,
        },
        Err(message) => SyncOutcome {
            sync_type,
            record_count: 0,
            error: Some(message),
            log_error,
        },
    }
}
