//! # Response Envelopes
//!
//! The uniform wire contract: success bodies are
//! `{success: true, data: ...}`, failure bodies `{success: false, error: ...}`.

use serde::Serialize;
use serde_json::Value;

/// Success envelope
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl SuccessResponse<Value> {
    /// Envelope with an empty-object payload, used by delete handlers.
    pub fn empty() -> Self {
        Self::new(Value::Object(serde_json::Map::new()))
    }
}

/// Failure envelope
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
