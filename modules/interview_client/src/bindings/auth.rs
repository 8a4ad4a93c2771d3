//! Observable authentication session

use super::state::{ResourceState, StateCell};
use crate::contract::{ApiError, AuthApi, RegisterRequest, TokenResponse, UserInfo};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// What the session knows about the signed-in user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    /// Last token response from login, registration or refresh
    pub tokens: Option<TokenResponse>,
    /// Profile loaded by [`AuthSession::user_info`]
    pub user: Option<UserInfo>,
}

/// Wraps an [`AuthApi`] and publishes session state to observers.
pub struct AuthSession {
    api: Arc<dyn AuthApi>,
    state: StateCell<SessionData>,
}

impl AuthSession {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            api,
            state: StateCell::new(SessionData::default()),
        }
    }

    pub fn snapshot(&self) -> ResourceState<SessionData> {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResourceState<SessionData>> {
        self.state.subscribe()
    }

    pub fn updates(&self) -> WatchStream<ResourceState<SessionData>> {
        self.state.updates()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.state
            .track(self.api.login(email, password), |data, tokens| {
                data.tokens = Some(tokens.clone());
            })
            .await
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.state
            .track(self.api.register(request), |data, tokens| {
                data.tokens = Some(tokens.clone());
            })
            .await
    }

    /// Refresh using the refresh token from the last token response.
    pub async fn refresh(&self) -> Result<TokenResponse, ApiError> {
        let refresh_token = self
            .state
            .snapshot()
            .data
            .tokens
            .and_then(|t| t.refresh_token)
            .ok_or_else(|| ApiError::transport("No refresh token available"))?;

        self.state
            .track(self.api.refresh_token(&refresh_token), |data, tokens| {
                data.tokens = Some(tokens.clone());
            })
            .await
    }

    pub async fn user_info(&self) -> Result<UserInfo, ApiError> {
        self.state
            .track(self.api.user_info(), |data, user| {
                data.user = Some(user.clone());
            })
            .await
    }

    /// Drop the token and forget everything about the user.
    pub fn logout(&self) {
        self.api.logout();
        self.state.reset(SessionData::default());
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.snapshot();
        f.debug_struct("AuthSession")
            .field("has_tokens", &state.data.tokens.is_some())
            .field("user", &state.data.user.as_ref().map(|u| u.id))
            .field("loading", &state.loading)
            .finish()
    }
}
