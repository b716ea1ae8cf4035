//! Append-only log of sync run outcomes.

use crate::schema::sync_logs;
use crate::{DatabaseResult, NewSyncLogRow, PostgresHonorStore, SyncLogRow};
use diesel::prelude::*;
use sekai_honors_core::{Server, SyncType};
use tracing::instrument;

/// Repository for sync run outcomes.
///
/// There is no update or delete: rows are only ever appended.
pub trait SyncLogRepository {
    /// Record one run. Never conflicts with existing rows.
    fn append_sync_log(&mut self, entry: &NewSyncLogRow) -> DatabaseResult<SyncLogRow>;

    /// Most recent runs first, optionally narrowed by server and sync type.
    fn recent_sync_logs(
        &mut self,
        server: Option<Server>,
        sync_type: Option<SyncType>,
        limit: i64,
    ) -> DatabaseResult<Vec<SyncLogRow>>;

    /// Number of recorded runs, optionally for one server.
    fn count_sync_logs(&mut self, server: Option<Server>) -> DatabaseResult<i64>;
}

impl<'a> SyncLogRepository for PostgresHonorStore<'a> {
    #[instrument(skip(self, entry), fields(server = %entry.server, sync_type = %entry.sync_type, success = entry.success))]
    fn append_sync_log(&mut self, entry: &NewSyncLogRow) -> DatabaseResult<SyncLogRow> {
        Server::parse_tag(&entry.server)?;
        diesel::insert_into(sync_logs::table)
            .values(entry)
            .get_result(self.conn)
            .map_err(Into::into)
    }

    fn recent_sync_logs(
        &mut self,
        server: Option<Server>,
        sync_type: Option<SyncType>,
        limit: i64,
    ) -> DatabaseResult<Vec<SyncLogRow>> {
        let mut query = sync_logs::table.into_boxed();

        if let Some(server) = server {
            query = query.filter(sync_logs::server.eq(server.tag()));
        }
        if let Some(sync_type) = sync_type {
            query = query.filter(sync_logs::sync_type.eq(sync_type.to_string()));
        }

        query
            .order((sync_logs::synced_at.desc(), sync_logs::id.desc()))
            .limit(limit)
            .load(self.conn)
            .map_err(Into::into)
    }

    fn count_sync_logs(&mut self, server: Option<Server>) -> DatabaseResult<i64> {
        let mut query = sync_logs::table.into_boxed();

        if let Some(server) = server {
            query = query.filter(sync_logs::server.eq(server.tag()));
        }

        query.count().get_result(self.conn).map_err(Into::into)
    }
}
