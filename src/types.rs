use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

/// Values that can be bound as statement parameters or read back from a row.
///
/// The same enum is used in both directions so helper code does not need to
/// branch on driver types:
/// ```rust
/// use sqlite_facade::prelude::*;
///
/// let params = vec![
///     Value::Int(1),
///     Value::Text("alice".into()),
///     Value::Bool(true),
/// ];
/// # let _ = params;
/// ```
///
/// Column reads only ever produce `Null`, `Int`, `Float`, `Text` and `Blob`;
/// the remaining variants exist for binding and are stored by the engine in
/// one of those five storage classes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value (64-bit; also carries 32-bit binds)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value, copied by the engine when bound
    Text(String),
    /// Boolean value, bound as integer 0/1
    Bool(bool),
    /// Timestamp value, bound as `YYYY-MM-DD HH:MM:SS.SSS` text
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// JSON value, bound as serialized text
    Json(JsonValue),
    /// Binary data owned by the value; the engine copies it when binding
    Blob(Vec<u8>),
    /// Borrowed binary data that outlives every statement using it; bound
    /// without an intermediate owned copy
    StaticBlob(&'static [u8]),
}

impl Value {
    /// Fallback constructor for types without a native engine mapping:
    /// formats the value and binds it as text.
    pub fn from_display<T: std::fmt::Display>(value: T) -> Self {
        Value::Text(value.to_string())
    }

    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let Value::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<&bool> {
        if let Value::Bool(value) = self {
            return Some(value);
        } else if let Some(i) = self.as_int() {
            if *i == 1 {
                return Some(&true);
            } else if *i == 0 {
                return Some(&false);
            }
        }
        None
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let Value::Timestamp(value) = self {
            return Some(*value);
        } else if let Some(s) = self.as_text() {
            // Try "YYYY-MM-DD HH:MM:SS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(dt);
            }
            // Try "YYYY-MM-DD HH:MM:SS.SSS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S.%3f") {
                return Some(dt);
            }
        }
        None
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Borrow the bytes of either blob variant.
    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(bytes) => Some(bytes),
            Value::StaticBlob(bytes) => Some(bytes),
            _ => None,
        }
    }
}
