//! Masterdata ingestion into the Sekai honor store.
//!
//! A sync run fetches the upstream masterdata files of one server, upserts
//! every record, and appends one sync log row per entity type. Entity types
//! are independent: a failed `honors` run is recorded and does not block or
//! roll back `bonds_honors` or `honor_groups`.
//!
//! # Example
//!
//! ```rust,no_run
//! use sekai_honors_core::Server;
//! use sekai_honors_database::{establish_connection, PostgresHonorStore};
//! use sekai_honors_sync::{HonorsSyncer, HttpMasterdataSource, SyncConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = HttpMasterdataSource::new(&SyncConfig::default())?;
//! let syncer = HonorsSyncer::new(source);
//!
//! let mut conn = establish_connection()?;
//! let mut store = PostgresHonorStore::new(&mut conn);
//! let report = syncer.run(&mut store, Server::Jp).await;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod masterdata;
mod report;
mod source;
mod syncer;
mod target;

pub use config::{SyncConfig, SyncConfigBuilder};
pub use masterdata::{MasterBondsHonor, MasterHonor, MasterHonorGroup, decode_records};
pub use report::{SyncOutcome, SyncReport};
pub use source::{HttpMasterdataSource, MasterdataSource, render_url};
pub use syncer::HonorsSyncer;
pub use target::SyncTarget;

use sekai_honors_error::SyncError;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
