//! Error types for the Sekai honors store.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use sekai_honors_error::{DatabaseError, DatabaseErrorKind, HonorsResult};
//!
//! fn lookup() -> HonorsResult<String> {
//!     Err(DatabaseError::new(DatabaseErrorKind::NotFound))?
//! }
//!
//! assert!(lookup().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod json;
mod sync;

pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{HonorsError, HonorsErrorKind, HonorsResult};
pub use json::JsonError;
pub use sync::{SyncError, SyncErrorKind};
