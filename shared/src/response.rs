//! API Response types
//!
//! Non-record bodies returned by the `employees` resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned with non-2xx statuses
///
/// ```json
/// { "detail": "Employee not found" }
/// ```
///
/// `detail` is a plain string for domain errors and a structured list for
/// request-shape errors (422), so it is kept as a raw JSON value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: Value,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Value::String(detail.into()),
        }
    }

    /// Human-readable message for the detail
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.get("msg")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| item.to_string())
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}

/// Acknowledgement body, e.g. `{"message": "Employee deleted"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
