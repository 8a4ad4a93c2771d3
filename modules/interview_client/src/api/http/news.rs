//! HTTP implementation of [`NewsApi`]

use super::gateway::GatewayClient;
use super::routes;
use crate::contract::{ApiError, News, NewsApi, NewsRequest, Page, PageRequest};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct NewsClient {
    gateway: Arc<GatewayClient>,
}

impl NewsClient {
    pub fn new(gateway: Arc<GatewayClient>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl NewsApi for NewsClient {
    async fn create_news(&self, request: NewsRequest) -> Result<News, ApiError> {
        let endpoint = &routes::NEWS_CREATE;
        self.gateway.call_with(endpoint, endpoint.path, &request).await
    }

    async fn list_news(&self, page: PageRequest) -> Result<Page<News>, ApiError> {
        let endpoint = &routes::NEWS_LIST;
        self.gateway.call(endpoint, &endpoint.paged(page)).await
    }

    async fn get_news(&self, id: i64) -> Result<News, ApiError> {
        let endpoint = &routes::NEWS_GET;
        self.gateway.call(endpoint, &endpoint.with_id(id)).await
    }

    async fn update_news(&self, id: i64, request: NewsRequest) -> Result<News, ApiError> {
        let endpoint = &routes::NEWS_UPDATE;
        self.gateway
            .call_with(endpoint, &endpoint.with_id(id), &request)
            .await
    }

    async fn delete_news(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = &routes::NEWS_DELETE;
        self.gateway.call_unit(endpoint, &endpoint.with_id(id)).await
    }
}
