//! Error wire shape
//!
//! The JSON body returned for every failed request. Shared so the
//! client can decode server failures instead of string-matching.

use serde::{Deserialize, Serialize};

/// Error body: `{"error": "not_found", "message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable kind: not_found | validation_error | internal_error
    pub error: String,
    /// Human-readable description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
