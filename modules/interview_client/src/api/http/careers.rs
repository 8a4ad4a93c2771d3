//! HTTP implementation of [`CareerApi`]

use super::gateway::GatewayClient;
use super::routes;
use crate::contract::{ApiError, Career, CareerApi, CareerRequest, Page, PageRequest};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct CareerClient {
    gateway: Arc<GatewayClient>,
}

impl CareerClient {
    pub fn new(gateway: Arc<GatewayClient>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl CareerApi for CareerClient {
    async fn create_career(&self, request: CareerRequest) -> Result<Career, ApiError> {
        let endpoint = &routes::CAREERS_CREATE;
        self.gateway.call_with(endpoint, endpoint.path, &request).await
    }

    async fn list_careers(&self, page: PageRequest) -> Result<Page<Career>, ApiError> {
        let endpoint = &routes::CAREERS_LIST;
        self.gateway.call(endpoint, &endpoint.paged(page)).await
    }

    async fn get_career(&self, id: i64) -> Result<Career, ApiError> {
        let endpoint = &routes::CAREER_GET;
        self.gateway.call(endpoint, &endpoint.with_id(id)).await
    }
}
