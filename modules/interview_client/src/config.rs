//! Configuration for the interview client

use anyhow::Context;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable prefix, e.g. `INTERVIEW_CLIENT_BASE_ADDRESS`
pub const ENV_PREFIX: &str = "INTERVIEW_CLIENT_";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Gateway base address; routes are appended verbatim
    #[serde(default = "default_base_address")]
    pub base_address: String,

    /// Initial bearer token
    #[serde(default)]
    pub token: Option<String>,

    /// Per-request timeout in milliseconds (`None` disables the timeout)
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: Option<u64>,

    /// Key under which the token is mirrored in the token store
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Mirror the token to this JSON file instead of keeping it in memory
    #[serde(default)]
    pub token_file: Option<PathBuf>,

    /// `User-Agent` header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_address: default_base_address(),
            token: None,
            timeout_millis: default_timeout_millis(),
            token_key: default_token_key(),
            token_file: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Defaults pointed at `base_address`.
    pub fn new(base_address: impl Into<String>) -> Self {
        Self {
            base_address: base_address.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout_millis(mut self, timeout_millis: Option<u64>) -> Self {
        self.timeout_millis = timeout_millis;
        self
    }

    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_millis.map(Duration::from_millis)
    }

    /// Load configuration: defaults, then the optional YAML file, then
    /// `INTERVIEW_CLIENT_*` environment variables.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            anyhow::ensure!(path.exists(), "config file not found: {}", path.display());
            figment = figment.merge(Yaml::file(path));
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract from an already assembled figment.
    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        figment
            .extract::<Self>()
            .context("invalid interview client configuration")
    }
}

fn default_base_address() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_millis() -> Option<u64> {
    Some(10_000)
}

fn default_token_key() -> String {
    "authToken".to_string()
}

fn default_user_agent() -> String {
    format!("interview-client/{}", env!("CARGO_PKG_VERSION"))
}
