//! HTTP implementation of [`AuthApi`]

use super::gateway::GatewayClient;
use super::routes;
use crate::contract::{
    ApiError, AuthApi, LoginRequest, RefreshRequest, RegisterRequest, TokenResponse, UserInfo,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Authentication client. Token adoption for login, registration and
/// refresh happens in the gateway, so these methods only shape requests.
#[derive(Clone)]
pub struct AuthClient {
    gateway: Arc<GatewayClient>,
}

impl AuthClient {
    pub fn new(gateway: Arc<GatewayClient>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, ApiError> {
        let endpoint = &routes::AUTH_REGISTER;
        self.gateway
            .call_with(endpoint, endpoint.path, &request)
            .await
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let endpoint = &routes::AUTH_LOGIN;
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.gateway.call_with(endpoint, endpoint.path, &body).await
    }

    async fn user_info(&self) -> Result<UserInfo, ApiError> {
        let endpoint = &routes::AUTH_USER_INFO;
        self.gateway.call(endpoint, endpoint.path).await
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse, ApiError> {
        let endpoint = &routes::AUTH_REFRESH;
        let body = RefreshRequest {
            refresh_token: refresh_token.to_owned(),
        };
        self.gateway.call_with(endpoint, endpoint.path, &body).await
    }

    async fn verify_email(&self, verify_token: &str) -> Result<TokenResponse, ApiError> {
        let endpoint = &routes::AUTH_VERIFY;
        let route = format!(
            "{}?token={}",
            endpoint.path,
            urlencoding::encode(verify_token)
        );
        self.gateway.call(endpoint, &route).await
    }

    fn logout(&self) {
        tracing::info!("Logging out");
        self.gateway.clear_token();
    }
}
