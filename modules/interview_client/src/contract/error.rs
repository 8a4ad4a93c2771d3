//! Contract error type for the interview client
//!
//! Every failed call, whatever its origin, converges on [`ApiError`].
//! Callers discriminate on `status_code`: `0` means no usable response
//! reached the client, anything else is the HTTP status the server sent.

use serde_json::{Map, Value};
use thiserror::Error;

/// Status code used for failures where no HTTP response was obtained.
pub const TRANSPORT_STATUS: u16 = 0;

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// DNS, connect, timeout or body decode failure (`status_code == 0`)
    Transport,
    /// Server-issued rejection (`status_code > 0`)
    Server,
}

/// Normalized error returned by every client operation
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message (server `detail`, `HTTP <status>`, or a transport description)
    pub message: String,
    /// `0` for transport-level failures, the HTTP status otherwise
    pub status_code: u16,
    /// Decoded error body, empty when the server sent none or it was not a JSON object
    pub payload: Map<String, Value>,
}

impl ApiError {
    /// Failure before any response was obtained.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: TRANSPORT_STATUS,
            payload: Map::new(),
        }
    }

    /// Server rejection. The message is taken from `payload.detail` when it
    /// is a non-empty string, otherwise it is `HTTP <status>`.
    pub fn server(status_code: u16, payload: Map<String, Value>) -> Self {
        let message = payload
            .get("detail")
            .and_then(Value::as_str)
            .filter(|detail| !detail.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("HTTP {}", status_code));

        Self {
            message,
            status_code,
            payload,
        }
    }

    /// Response arrived but its body could not be decoded.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::transport(format!("Invalid response body: {}", err))
    }

    pub fn kind(&self) -> ErrorKind {
        if self.status_code == TRANSPORT_STATUS {
            ErrorKind::Transport
        } else {
            ErrorKind::Server
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Whether the server rejected the credentials (401).
    pub fn is_unauthorized(&self) -> bool {
        self.status_code == 401
    }

    /// Look up a string field of the error payload.
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }
}
