//! HTTP implementation of [`ExamApi`]

use super::gateway::GatewayClient;
use super::routes;
use crate::contract::{ApiError, Exam, ExamApi, ExamRequest, Page, PageRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Exam client
#[derive(Clone)]
pub struct ExamClient {
    gateway: Arc<GatewayClient>,
}

impl ExamClient {
    pub fn new(gateway: Arc<GatewayClient>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ExamApi for ExamClient {
    async fn create_exam(&self, request: ExamRequest) -> Result<Exam, ApiError> {
        let endpoint = &routes::EXAMS_CREATE;
        self.gateway.call_with(endpoint, endpoint.path, &request).await
    }

    async fn list_exams(&self, page: PageRequest) -> Result<Page<Exam>, ApiError> {
        let endpoint = &routes::EXAMS_LIST;
        self.gateway.call(endpoint, &endpoint.paged(page)).await
    }

    async fn get_exam(&self, id: i64) -> Result<Exam, ApiError> {
        let endpoint = &routes::EXAM_GET;
        self.gateway.call(endpoint, &endpoint.with_id(id)).await
    }

    async fn update_exam(&self, id: i64, request: ExamRequest) -> Result<Exam, ApiError> {
        let endpoint = &routes::EXAM_UPDATE;
        self.gateway
            .call_with(endpoint, &endpoint.with_id(id), &request)
            .await
    }

    async fn delete_exam(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = &routes::EXAM_DELETE;
        self.gateway.call_unit(endpoint, &endpoint.with_id(id)).await
    }
}
