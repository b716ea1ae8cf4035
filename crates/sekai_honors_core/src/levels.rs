//! Per-level payload attached to honors and bonds honors.

use sekai_honors_error::DatabaseError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered collection of upstream level records.
///
/// The payload is opaque: it must be a JSON array whose elements are JSON
/// objects, and nothing about the objects themselves is checked.
///
/// # Examples
///
/// ```
/// use sekai_honors_core::Levels;
/// use serde_json::json;
///
/// let levels = Levels::try_from(json!([{"level": 1, "bonus": 10}])).unwrap();
/// assert_eq!(levels.len(), 1);
///
/// assert!(Levels::try_from(json!({"level": 1})).is_err());
/// assert!(Levels::default().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Levels(Value);

impl Levels {
    /// Check that a value is an array of objects.
    #[track_caller]
    pub fn validate(value: &Value) -> Result<(), DatabaseError> {
        let items = value.as_array().ok_or_else(|| {
            DatabaseError::malformed(format!("levels must be an array, got {}", kind_of(value)))
        })?;

        if let Some(pos) = items.iter().position(|item| !item.is_object()) {
            return Err(DatabaseError::malformed(format!(
                "levels[{}] must be an object, got {}",
                pos,
                kind_of(&items[pos])
            )));
        }

        Ok(())
    }

    /// Build from an optional upstream value; absent or null means no levels.
    pub fn from_upstream(value: Option<Value>) -> Result<Self, DatabaseError> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(v) => Self::try_from(v),
        }
    }

    /// Number of level records.
    pub fn len(&self) -> usize {
        self.0.as_array().map_or(0, Vec::len)
    }

    /// Whether there are no level records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the underlying JSON value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self(Value::Array(Vec::new()))
    }
}

impl TryFrom<Value> for Levels {
    type Error = DatabaseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl From<Levels> for Value {
    fn from(levels: Levels) -> Self {
        levels.0
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
