//! Read-boundary normalization for expense weights.
//!
//! The `weights` column holds client-defined JSON. Depending on how a row
//! was written it comes back either as structured JSON or as a JSON document
//! that was itself encoded as a string. [`StoredWeights`] captures the three
//! shapes and [`StoredWeights::normalize`] collapses them into the value put
//! on the wire. Normalization never fails.

use serde_json::Value;

/// Weights as read from the store, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredWeights {
    /// SQL `NULL`, JSON `null`, or a column that was never written.
    Null,
    /// Any JSON value other than null or a string.
    Structured(Value),
    /// JSON text stored as a string value.
    Text(String),
}

impl StoredWeights {
    /// Collapses the stored representation into the wire value.
    ///
    /// - `Null` → `[]`
    /// - `Structured(v)` → `v` unchanged
    /// - `Text(s)` → `s` parsed as JSON, `[]` if it does not parse or parses
    ///   to `null`
    #[must_use]
    pub fn normalize(self) -> Value {
        match self {
            Self::Null => empty(),
            Self::Structured(v) => v,
            Self::Text(s) => match serde_json::from_str::<Value>(&s) {
                Ok(Value::Null) | Err(_) => empty(),
                Ok(v) => v,
            },
        }
    }
}

impl From<Option<Value>> for StoredWeights {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Null,
            Some(Value::String(s)) => Self::Text(s),
            Some(v) => Self::Structured(v),
        }
    }
}

impl From<Value> for StoredWeights {
    fn from(value: Value) -> Self {
        Self::from(Some(value))
    }
}

fn empty() -> Value {
    Value::Array(Vec::new())
}
