//! PostgreSQL-backed honor store.

use diesel::pg::PgConnection;

/// PostgreSQL implementation of the honor store repositories.
///
/// Borrows a single connection. Every upsert is one
/// `INSERT ... ON CONFLICT ... DO UPDATE` statement; batch upserts run inside
/// one transaction. For parallel writers open one store per connection.
///
/// # Example
/// ```no_run
/// use sekai_honors_database::{establish_connection, HonorRepository, PostgresHonorStore};
/// use sekai_honors_core::Server;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut conn = establish_connection()?;
/// let mut store = PostgresHonorStore::new(&mut conn);
/// let honor = store.get_honor(Server::Jp, 42)?;
/// # Ok(())
/// # }
/// ```
pub struct PostgresHonorStore<'a> {
    pub(crate) conn: &'a mut PgConnection,
}

impl<'a> PostgresHonorStore<'a> {
    /// Create a store over a mutable connection reference.
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}
