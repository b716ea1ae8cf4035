//! Narrowing of upstream identifiers to the store's integer domain.

use sekai_honors_error::DatabaseError;

/// Narrow an upstream integer to `i32`.
///
/// # Examples
///
/// ```
/// use sekai_honors_core::narrow_id;
///
/// assert_eq!(narrow_id("id", 42).unwrap(), 42);
/// assert!(narrow_id("id", i64::from(i32::MAX) + 1).is_err());
/// ```
#[track_caller]
pub fn narrow_id(field: &str, value: i64) -> Result<i32, DatabaseError> {
    i32::try_from(value).map_err(|_| {
        DatabaseError::malformed(format!("{} value {} does not fit a 32-bit integer", field, value))
    })
}

/// [`narrow_id`] for optional upstream fields.
#[track_caller]
pub fn narrow_optional_id(field: &str, value: Option<i64>) -> Result<Option<i32>, DatabaseError> {
    value.map(|v| narrow_id(field, v)).transpose()
}
