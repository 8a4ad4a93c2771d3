//! HTTP implementation of [`UserApi`]

use super::gateway::GatewayClient;
use super::routes;
use crate::contract::{
    ApiError, Page, PageRequest, RoleUpdateRequest, StatusUpdateRequest, User, UserApi,
};
use async_trait::async_trait;
use std::sync::Arc;

/// User administration client
#[derive(Clone)]
pub struct UserClient {
    gateway: Arc<GatewayClient>,
}

impl UserClient {
    pub fn new(gateway: Arc<GatewayClient>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UserApi for UserClient {
    async fn list_users(&self, page: PageRequest) -> Result<Page<User>, ApiError> {
        let endpoint = &routes::USERS_LIST;
        self.gateway.call(endpoint, &endpoint.paged(page)).await
    }

    async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        let endpoint = &routes::USER_GET;
        self.gateway.call(endpoint, &endpoint.with_id(id)).await
    }

    async fn update_user_role(&self, id: i64, role_id: i64) -> Result<User, ApiError> {
        let endpoint = &routes::USER_ROLE_UPDATE;
        self.gateway
            .call_with(endpoint, &endpoint.with_id(id), &RoleUpdateRequest { role_id })
            .await
    }

    async fn update_user_status(&self, id: i64, status: &str) -> Result<User, ApiError> {
        let endpoint = &routes::USER_STATUS_UPDATE;
        let body = StatusUpdateRequest {
            status: status.to_owned(),
        };
        self.gateway
            .call_with(endpoint, &endpoint.with_id(id), &body)
            .await
    }
}
