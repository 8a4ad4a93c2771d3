//! API gateway client.
//!
//! Owns the base address, the bearer token and the HTTP connection pool.
//! Every call performs exactly one network attempt and resolves to either
//! the decoded JSON body or an [`ApiError`]. Two side effects are applied
//! on the way out:
//! - a successful token-issuing call adopts the returned `accessToken`,
//!   only once the whole call has succeeded (typed decoding included)
//! - any 401 clears the token and notifies the session listener
//!
//! Logged routes never include the query string.

use super::problem::{decode_success, normalize_failure};
use super::routes::{self, Endpoint, HttpMethod};
use crate::config::ClientConfig;
use crate::contract::ApiError;
use crate::domain::{NoOpSessionListener, SessionListener, TokenStore};
use crate::infra::storage::{FileTokenStore, InMemoryTokenStore};
use parking_lot::RwLock;
use reqwest::header::CONTENT_TYPE;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Failure while constructing a [`GatewayClient`]
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid base address '{address}': {reason}")]
    InvalidBaseAddress { address: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the interview platform gateway
pub struct GatewayClient {
    http: reqwest::Client,
    base_address: String,
    token: RwLock<Option<String>>,
    token_key: String,
    store: Arc<dyn TokenStore>,
    listener: Arc<dyn SessionListener>,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_address", &self.base_address)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

/// Builder for [`GatewayClient`]
pub struct GatewayClientBuilder {
    config: ClientConfig,
    store: Option<Arc<dyn TokenStore>>,
    listener: Option<Arc<dyn SessionListener>>,
}

impl GatewayClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            store: None,
            listener: None,
        }
    }

    /// Mirror the token into `store` instead of the configured default.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn session_listener(mut self, listener: Arc<dyn SessionListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn build(self) -> Result<GatewayClient, BuildError> {
        let base_address = normalize_base_address(&self.config.base_address)?;

        let mut http = reqwest::Client::builder().user_agent(self.config.user_agent.clone());
        if let Some(timeout) = self.config.timeout() {
            http = http.timeout(timeout);
        }
        let http = http.build()?;

        let store = self.store.unwrap_or_else(|| match &self.config.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path.clone())) as Arc<dyn TokenStore>,
            None => Arc::new(InMemoryTokenStore::new()) as Arc<dyn TokenStore>,
        });
        let listener = self
            .listener
            .unwrap_or_else(|| Arc::new(NoOpSessionListener) as Arc<dyn SessionListener>);

        let client = GatewayClient {
            http,
            base_address,
            token: RwLock::new(None),
            token_key: self.config.token_key.clone(),
            store,
            listener,
        };

        match self.config.token {
            Some(token) => client.set_token(Some(token)),
            None => client.restore_token(),
        }

        tracing::debug!(
            base_address = %client.base_address,
            authenticated = client.is_authenticated(),
            "Gateway client initialized"
        );
        Ok(client)
    }
}

fn normalize_base_address(address: &str) -> Result<String, BuildError> {
    let invalid = |reason: String| BuildError::InvalidBaseAddress {
        address: address.to_owned(),
        reason,
    };

    let url = url::Url::parse(address).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".into()));
    }

    Ok(address.trim_end_matches('/').to_owned())
}

impl GatewayClient {
    pub fn builder(config: ClientConfig) -> GatewayClientBuilder {
        GatewayClientBuilder::new(config)
    }

    /// Client with default token store and listener.
    pub fn new(config: ClientConfig) -> Result<Self, BuildError> {
        GatewayClientBuilder::new(config).build()
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    // ===== Token state =====

    /// Snapshot of the current token.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Replace the current token. `None` clears authentication. The change
    /// is mirrored into the token store (write on set, delete on clear).
    pub fn set_token(&self, token: Option<String>) {
        let authenticated = token.is_some();
        let mirrored = {
            // Held across the store update so memory and store change together.
            let mut current = self.token.write();
            let mirrored = match &token {
                Some(value) => self.store.set(&self.token_key, value),
                None => self.store.remove(&self.token_key),
            };
            *current = token;
            mirrored
        };

        if let Err(e) = mirrored {
            tracing::warn!(error = %e, "Failed to mirror token into token store");
        }
        self.listener.on_token_changed(authenticated);
    }

    pub fn clear_token(&self) {
        self.set_token(None);
    }

    fn restore_token(&self) {
        match self.store.get(&self.token_key) {
            Ok(Some(token)) if !token.is_empty() => {
                *self.token.write() = Some(token);
                tracing::debug!("Restored token from token store");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Failed to read token store"),
        }
    }

    // ===== Requests =====

    /// Perform one request against `route` (path plus optional query,
    /// relative to the base address) and return the decoded JSON body.
    ///
    /// Routes that match a token-issuing catalog entry adopt the returned
    /// `accessToken` on success.
    pub async fn request(
        &self,
        route: &str,
        method: HttpMethod,
        body: Option<&Value>,
        requires_auth: bool,
    ) -> Result<Value, ApiError> {
        let propagates_token = routes::lookup(method, route)
            .map(|endpoint| endpoint.propagates_token)
            .unwrap_or(false);
        let value = self.execute(method, route, body, requires_auth).await?;
        if propagates_token {
            self.adopt_token(route, &value);
        }
        Ok(value)
    }

    /// Call a catalog endpoint and return the raw JSON body.
    pub async fn call_raw(
        &self,
        endpoint: &Endpoint,
        route: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let value = self
            .execute(endpoint.method, route, body, endpoint.requires_auth)
            .await?;
        if endpoint.propagates_token {
            self.adopt_token(route, &value);
        }
        Ok(value)
    }

    /// Call a catalog endpoint without a body and decode the response.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        route: &str,
    ) -> Result<T, ApiError> {
        let value = self
            .execute(endpoint.method, route, None, endpoint.requires_auth)
            .await?;
        self.finish(endpoint, route, value)
    }

    /// Call a catalog endpoint with a JSON body and decode the response.
    pub async fn call_with<B, T>(
        &self,
        endpoint: &Endpoint,
        route: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::transport(format!("Invalid request body: {}", e)))?;
        let value = self
            .execute(endpoint.method, route, Some(&body), endpoint.requires_auth)
            .await?;
        self.finish(endpoint, route, value)
    }

    /// Call a catalog endpoint whose response body is irrelevant.
    pub async fn call_unit(&self, endpoint: &Endpoint, route: &str) -> Result<(), ApiError> {
        self.call_raw(endpoint, route, None).await.map(|_| ())
    }

    /// Decode a typed result, then adopt the token. A body that does not
    /// fit `T` fails the call and leaves the token as it was.
    fn finish<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        route: &str,
        value: Value,
    ) -> Result<T, ApiError> {
        let typed = T::deserialize(&value).map_err(ApiError::decode)?;
        if endpoint.propagates_token {
            self.adopt_token(route, &value);
        }
        Ok(typed)
    }

    async fn execute(
        &self,
        method: HttpMethod,
        route: &str,
        body: Option<&Value>,
        requires_auth: bool,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_address, route);
        let path = log_path(route);
        // Header value is fixed here; a concurrent set_token does not affect this request.
        let token = self.token();

        if requires_auth && token.is_none() {
            tracing::debug!(%method, path, "Calling auth-required route without a token");
        }
        tracing::debug!(%method, path, authenticated = token.is_some(), "Sending request");

        let mut request = self
            .http
            .request(method.into(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token.as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(network_error)?;
        let status = response.status();

        if !status.is_success() {
            // An unreadable error body is treated like an empty one.
            let bytes = response.bytes().await.unwrap_or_default();
            if status.as_u16() == 401 {
                self.invalidate_session(route);
            }
            let err = normalize_failure(status.as_u16(), &bytes);
            tracing::debug!(%method, path, status = err.status_code, message = %err.message, "Request rejected");
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(network_error)?;
        decode_success(&bytes)
    }

    fn adopt_token(&self, route: &str, body: &Value) {
        let issued = body
            .get("accessToken")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty());
        if let Some(token) = issued {
            self.set_token(Some(token.to_owned()));
            tracing::info!(path = log_path(route), "Adopted access token from response");
        }
    }

    fn invalidate_session(&self, route: &str) {
        tracing::warn!(path = log_path(route), "Authentication rejected, clearing token");
        self.set_token(None);
        self.listener.on_unauthorized(route);
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::transport(format!("Network error: request timed out ({})", err))
    } else {
        ApiError::transport(format!("Network error: {}", err))
    }
}

/// Route without its query string, which may carry one-time tokens.
fn log_path(route: &str) -> &str {
    route.split_once('?').map_or(route, |(path, _)| path)
}
