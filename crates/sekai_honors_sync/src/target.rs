//! The slice of the honor store a sync run writes to.

use sekai_honors_database::{
    BondsHonorRepository, DatabaseResult, HonorRepository, NewBondsHonorRow, NewHonorGroupRow,
    NewHonorRow, NewSyncLogRow, PostgresHonorStore, SyncLogRepository,
};

/// Write-side contract of a sync run: batch upserts plus one log row per run.
pub trait SyncTarget {
    /// Upsert honor groups, returning how many were written.
    fn upsert_honor_groups(&mut self, groups: &[NewHonorGroupRow]) -> DatabaseResult<usize>;

    /// Upsert honors, returning how many were written.
    fn upsert_honors(&mut self, honors: &[NewHonorRow]) -> DatabaseResult<usize>;

    /// Upsert bonds honors, returning how many were written.
    fn upsert_bonds_honors(&mut self, honors: &[NewBondsHonorRow]) -> DatabaseResult<usize>;

    /// Record the outcome of one run.
    fn append_sync_log(&mut self, entry: &NewSyncLogRow) -> DatabaseResult<()>;
}

impl<'a> SyncTarget for PostgresHonorStore<'a> {
    fn upsert_honor_groups(&mut self, groups: &[NewHonorGroupRow]) -> DatabaseResult<usize> {
        HonorRepository::upsert_honor_groups(self, groups)
    }

    fn upsert_honors(&mut self, honors: &[NewHonorRow]) -> DatabaseResult<usize> {
        HonorRepository::upsert_honors(self, honors)
    }

    fn upsert_bonds_honors(&mut self, honors: &[NewBondsHonorRow]) -> DatabaseResult<usize> {
        BondsHonorRepository::upsert_bonds_honors(self, honors)
    }

    fn append_sync_log(&mut self, entry: &NewSyncLogRow) -> DatabaseResult<()> {
        SyncLogRepository::append_sync_log(self, entry).map(|_| ())
    }
}
