//! PostgreSQL honor store for Sekai masterdata.
//!
//! This crate provides the schema, embedded migrations, Diesel models and
//! repository implementations for honors, honor groups, bonds honors and the
//! sync log, plus the read-only `v_honors_with_group` view.
//!
//! Every table is scoped by a `server` tag. Honors and honor groups are
//! related only by matching `(server, group_id)`; there is no foreign key, so
//! a honor may reference a group that has not been synced yet.
//!
//! # Example
//!
//! ```rust,no_run
//! use sekai_honors_core::{HonorFilter, Server};
//! use sekai_honors_database::{
//!     establish_connection, run_migrations, HonorRepository, NewHonorRow, PostgresHonorStore,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut conn = establish_connection()?;
//! run_migrations(&mut conn)?;
//!
//! let mut store = PostgresHonorStore::new(&mut conn);
//! store.upsert_honor(&NewHonorRow::new(Server::Jp, 42, "Ace"))?;
//! let honors = store.list_honors(Server::Jp, &HonorFilter::default())?;
//! # Ok(())
//! # }
//! ```

mod bonds_honor_repository;
mod connection;
mod honor_repository;
mod migrations;
mod models;
mod store;
mod sync_log_repository;

// Public modules for external access
pub mod schema;
pub mod views;

pub use bonds_honor_repository::BondsHonorRepository;
pub use connection::{establish_connection, establish_connection_to};
pub use honor_repository::HonorRepository;
pub use migrations::run_migrations;
pub use models::{
    BondsHonorRow, HonorGroupRow, HonorRow, HonorWithGroupRow, NewBondsHonorRow,
    NewHonorGroupRow, NewHonorRow, NewSyncLogRow, SyncLogRow,
};
pub use store::PostgresHonorStore;
pub use sync_log_repository::SyncLogRepository;

pub use diesel::pg::PgConnection;
pub use sekai_honors_error::{DatabaseError, DatabaseErrorKind};

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
