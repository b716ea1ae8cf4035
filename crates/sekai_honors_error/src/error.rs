//! Top-level error wrapper types.

use crate::{ConfigError, DatabaseError, JsonError, SyncError};

/// Every error a Sekai honors binary can surface.
///
/// # Examples
///
/// ```
/// use sekai_honors_error::{ConfigError, HonorsError};
///
/// let err: HonorsError = ConfigError::new("bad url").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HonorsErrorKind {
    /// Store error
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Upstream sync error
    #[from(SyncError)]
    Sync(SyncError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON output error
    #[from(JsonError)]
    Json(JsonError),
}

/// Sekai honors error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Sekai Honors Error: {}", _0)]
pub struct HonorsError(Box<HonorsErrorKind>);

impl HonorsError {
    /// Create a new error from a kind.
    pub fn new(kind: HonorsErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HonorsErrorKind {
        &self.0
    }
}

impl<T> From<T> for HonorsError
where
    T: Into<HonorsErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Sekai honors operations.
pub type HonorsResult<T> = std::result::Result<T, HonorsError>;
