//! RFC-9457 style error envelope returned by the platform services, and the
//! rules that turn raw response bodies into values or [`ApiError`]s.

use crate::contract::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Problem Details body sent by the platform on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: Option<String>,

    /// A short, human-readable summary of the problem type
    pub title: Option<String>,

    /// The HTTP status code
    pub status: Option<u16>,

    /// A human-readable explanation specific to this occurrence
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    pub instance: Option<String>,

    /// Application-specific error code
    pub error_code: Option<String>,

    pub trace_id: Option<String>,

    /// ISO 8601 timestamp
    pub timestamp: Option<String>,

    /// Additional details, e.g. per-field validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl ApiError {
    /// Typed view of the payload, if the server sent a problem envelope.
    pub fn problem(&self) -> Option<ErrorResponse> {
        if self.payload.is_empty() {
            return None;
        }
        serde_json::from_value(Value::Object(self.payload.clone())).ok()
    }
}

/// Decode an error body. Anything that is not a JSON object yields an
/// empty payload.
pub fn decode_error_payload(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Normalize a non-2xx response.
pub fn normalize_failure(status: u16, body: &[u8]) -> ApiError {
    ApiError::server(status, decode_error_payload(body))
}

/// Decode a 2xx body. An empty body is `null`; anything else must be JSON.
pub fn decode_success(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(ApiError::decode)
}
