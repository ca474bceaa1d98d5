//! Tolerant JSON field types.
//!
//! The API's historical clients send numeric fields both as JSON numbers and
//! as decimal strings; request DTOs accept either form and normalize.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntOrText {
    Int(i64),
    Text(String),
}

impl IntOrText {
    /// The value as an integer, if it is one or parses as one.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(n) => i32::try_from(*n).ok(),
            Self::Text(s) => s.parse::<i32>().ok(),
        }
    }

    /// The value rendered the way the store keeps it: decimal text.
    pub fn to_text(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Only the string form can be empty; numbers always carry a value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}
