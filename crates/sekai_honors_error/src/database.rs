//! Database error types.

/// Database error conditions.
///
/// `NotFound` is an ordinary negative result; the store's lookup operations
/// return `Option` and only surface it where a caller demands a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DatabaseErrorKind {
    /// Record not found
    #[display("Record not found")]
    NotFound,
    /// A unique key (or other declared constraint) rejected the write
    #[display("Constraint violation: {}", _0)]
    ConstraintViolation(String),
    /// Input rejected before it reached the database
    #[display("Malformed input: {}", _0)]
    MalformedInput(String),
    /// Engine unreachable or transaction aborted
    #[display("Storage unavailable: {}", _0)]
    StorageUnavailable(String),
    /// Query execution failed for another reason
    #[display("Database query error: {}", _0)]
    Query(String),
    /// Migration error
    #[display("Migration error: {}", _0)]
    Migration(String),
}

/// Database error with source location tracking.
///
/// # Examples
///
/// ```
/// use sekai_honors_error::{DatabaseError, DatabaseErrorKind};
///
/// let err = DatabaseError::new(DatabaseErrorKind::NotFound);
/// assert!(format!("{}", err).contains("not found"));
/// assert!(err.is_not_found());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Database Error: {} at line {} in {}", kind, line, file)]
pub struct DatabaseError {
    /// The kind of error that occurred
    pub kind: DatabaseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DatabaseError {
    /// Create a new DatabaseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DatabaseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a `MalformedInput` error.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(DatabaseErrorKind::MalformedInput(message.into()))
    }

    /// Whether this error is a missing record.
    pub fn is_not_found(&self) -> bool {
        self.kind == DatabaseErrorKind::NotFound
    }

    /// Whether this error is a collision with an existing key.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self.kind, DatabaseErrorKind::ConstraintViolation(_))
    }

    /// Whether the caller may retry the operation later.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.kind, DatabaseErrorKind::StorageUnavailable(_))
    }
}

// Diesel error conversions (only available with database feature)
#[cfg(feature = "database")]
impl From<diesel::result::Error> for DatabaseError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind as Pg, Error};

        let kind = match &err {
            Error::NotFound => DatabaseErrorKind::NotFound,
            Error::DatabaseError(
                Pg::UniqueViolation
                | Pg::ForeignKeyViolation
                | Pg::NotNullViolation
                | Pg::CheckViolation,
                info,
            ) => DatabaseErrorKind::ConstraintViolation(info.message().to_string()),
            Error::DatabaseError(
                Pg::ClosedConnection | Pg::SerializationFailure | Pg::UnableToSendCommand,
                info,
            ) => DatabaseErrorKind::StorageUnavailable(info.message().to_string()),
            Error::BrokenTransactionManager | Error::RollbackErrorOnCommit { .. } => {
                DatabaseErrorKind::StorageUnavailable(err.to_string())
            }
            _ => DatabaseErrorKind::Query(err.to_string()),
        };
        DatabaseError::new(kind)
    }
}

#[cfg(feature = "database")]
impl From<diesel::ConnectionError> for DatabaseError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        DatabaseError::new(DatabaseErrorKind::StorageUnavailable(err.to_string()))
    }
}

#[cfg(feature = "database")]
impl From<serde_json::Error> for DatabaseError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        DatabaseError::new(DatabaseErrorKind::MalformedInput(err.to_string()))
    }
}
