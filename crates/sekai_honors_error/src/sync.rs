//! Upstream masterdata synchronization error types.

/// Sync error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SyncErrorKind {
    /// Every configured mirror failed to deliver a file
    #[display("Failed to fetch {file}: {message}")]
    Fetch {
        /// Masterdata file name
        file: String,
        /// Last error seen
        message: String,
    },
    /// Payload was not the expected JSON shape
    #[display("Failed to decode {file}: {message}")]
    Decode {
        /// Masterdata file name
        file: String,
        /// Decoder message
        message: String,
    },
    /// Server tag not recognized
    #[display("Unknown server: {}", _0)]
    UnknownServer(String),
}

/// Sync error with source location tracking.
///
/// # Examples
///
/// ```
/// use sekai_honors_error::{SyncError, SyncErrorKind};
///
/// let err = SyncError::new(SyncErrorKind::UnknownServer("xx".to_string()));
/// assert!(format!("{}", err).contains("Unknown server: xx"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Sync Error: {} at line {} in {}", kind, line, file)]
pub struct SyncError {
    /// The kind of error that occurred
    pub kind: SyncErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SyncError {
    /// Create a new SyncError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SyncErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
