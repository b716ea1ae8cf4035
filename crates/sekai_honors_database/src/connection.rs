//! Database connection utilities.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use sekai_honors_error::{DatabaseError, DatabaseErrorKind};

/// Establish a connection to the PostgreSQL database.
///
/// Reads the `DATABASE_URL` environment variable to determine the connection string.
///
/// # Errors
///
/// Returns `StorageUnavailable` if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub fn establish_connection() -> DatabaseResult<PgConnection> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::StorageUnavailable(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })?;

    establish_connection_to(&database_url)
}

/// Establish a connection to an explicit PostgreSQL URL.
pub fn establish_connection_to(database_url: &str) -> DatabaseResult<PgConnection> {
    tracing::debug!("Connecting to PostgreSQL");
    PgConnection::establish(database_url).map_err(Into::into)
}
