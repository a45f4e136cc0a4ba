//! Values carried by filter operations.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A value compared against a field by a filter operation.
///
/// The variant set is closed on purpose: every converter matches on it
/// exhaustively, so adding a variant breaks each dialect's build until a
/// rendering is chosen for it. There is no null variant; absence is a
/// predicate ([`Operation::is_empty`]), not a value.
///
/// [`Operation::is_empty`]: crate::Operation::is_empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Timestamp value, rendered with minute precision by every dialect.
    DateTime(NaiveDateTime),
    /// String value.
    String(String),
    /// List of values.
    List(Vec<FilterValue>),
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<NaiveDateTime> for FilterValue {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}
