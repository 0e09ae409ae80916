//! Feedback types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A persisted feedback record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub name: Option<String>,
    pub feedback: Option<String>,
}

/// Feedback submission request
///
/// Nothing is rejected: missing or null fields become `None`, and any other
/// JSON value is kept as its text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub feedback: Option<String>,
}

impl NewFeedback {
    pub fn new(name: impl Into<String>, feedback: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            feedback: Some(feedback.into()),
        }
    }
}

/// Accept any JSON value for a text field.
///
/// Strings are taken as-is, `null` becomes `None`, numbers and booleans use
/// their literal text, arrays and objects their JSON text.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Body of every non-list API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
