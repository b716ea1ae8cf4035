//! Mirror Sekai honor masterdata into PostgreSQL and query it.
//!
//! This crate re-exports the workspace's public API and provides the layered
//! configuration used by the `sekai-honors` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::HonorsConfig;

pub use sekai_honors_core::{
    BondsHonorFilter, HonorFilter, HonorGroupFilter, HonorRarity, Levels, Server, SyncType,
};
pub use sekai_honors_database::{
    BondsHonorRepository, BondsHonorRow, DatabaseResult, HonorGroupRow, HonorRepository,
    HonorRow, HonorWithGroupRow, NewBondsHonorRow, NewHonorGroupRow, NewHonorRow,
    NewSyncLogRow, PgConnection, PostgresHonorStore, SyncLogRepository, SyncLogRow,
    establish_connection, establish_connection_to, run_migrations,
};
pub use sekai_honors_error::{
    ConfigError, DatabaseError, DatabaseErrorKind, HonorsError, HonorsErrorKind, HonorsResult,
    JsonError, SyncError, SyncErrorKind,
};
pub use sekai_honors_sync::{
    HonorsSyncer, HttpMasterdataSource, MasterdataSource, SyncConfig, SyncOutcome, SyncReport,
    SyncTarget,
};
