//! Persistent token store abstraction
//!
//! The gateway mirrors its bearer token into a key-value store so a
//! restarted host can pick the session back up. Implementations are in
//! `infra/storage`.

use thiserror::Error;

/// Token store failures. These are logged by the gateway, never surfaced
/// through `set_token`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("token store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("token store contents are invalid: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("token store location unavailable: {0}")]
    Unavailable(String),
}

/// Key-value store holding the bearer token
pub trait TokenStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
