//! JSON error types.

/// Failure to render query output as JSON, with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use sekai_honors_error::{HonorsError, HonorsErrorKind, JsonError};
    ///
    /// let err = JsonError::new("honor row could not be rendered");
    /// assert!(err.file.ends_with(".rs"));
    ///
    /// let wrapped: HonorsError = err.into();
    /// assert!(matches!(wrapped.kind(), HonorsErrorKind::Json(_)));
    /// assert!(wrapped.to_string().contains("honor row could not be rendered"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
