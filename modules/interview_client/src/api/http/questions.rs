//! HTTP implementation of [`QuestionApi`]

use super::gateway::GatewayClient;
use super::routes;
use crate::contract::{
    ApiError, Field, FieldRequest, Level, LevelRequest, Page, PageRequest, Question, QuestionApi,
    QuestionRequest, QuestionType, QuestionTypeRequest, Topic, TopicRequest,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Question bank and taxonomy client
#[derive(Clone)]
pub struct QuestionClient {
    gateway: Arc<GatewayClient>,
}

impl QuestionClient {
    pub fn new(gateway: Arc<GatewayClient>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl QuestionApi for QuestionClient {
    // ===== Fields =====

    async fn create_field(&self, request: FieldRequest) -> Result<Field, ApiError> {
        let endpoint = &routes::FIELDS_CREATE;
        self.gateway.call_with(endpoint, endpoint.path, &request).await
    }

    async fn list_fields(&self, page: PageRequest) -> Result<Page<Field>, ApiError> {
        let endpoint = &routes::FIELDS_LIST;
        self.gateway.call(endpoint, &endpoint.paged(page)).await
    }

    async fn get_field(&self, id: i64) -> Result<Field, ApiError> {
        let endpoint = &routes::FIELD_GET;
        self.gateway.call(endpoint, &endpoint.with_id(id)).await
    }

    async fn update_field(&self, id: i64, request: FieldRequest) -> Result<Field, ApiError> {
        let endpoint = &routes::FIELD_UPDATE;
        self.gateway
            .call_with(endpoint, &endpoint.with_id(id), &request)
            .await
    }

    async fn delete_field(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = &routes::FIELD_DELETE;
        self.gateway.call_unit(endpoint, &endpoint.with_id(id)).await
    }

    // ===== Topics =====

    async fn create_topic(&self, request: TopicRequest) -> Result<Topic, ApiError> {
        let endpoint = &routes::TOPICS_CREATE;
        self.gateway.call_with(endpoint, endpoint.path, &request).await
    }

    async fn list_topics(&self, page: PageRequest) -> Result<Page<Topic>, ApiError> {
        let endpoint = &routes::TOPICS_LIST;
        self.gateway.call(endpoint, &endpoint.paged(page)).await
    }

    async fn get_topic(&self, id: i64) -> Result<Topic, ApiError> {
        let endpoint = &routes::TOPIC_GET;
        self.gateway.call(endpoint, &endpoint.with_id(id)).await
    }

    async fn update_topic(&self, id: i64, request: TopicRequest) -> Result<Topic, ApiError> {
        let endpoint = &routes::TOPIC_UPDATE;
        self.gateway
            .call_with(endpoint, &endpoint.with_id(id), &request)
            .await
    }

    async fn delete_topic(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = &routes::TOPIC_DELETE;
        self.gateway.call_unit(endpoint, &endpoint.with_id(id)).await
    }

    // ===== Levels =====

    async fn create_level(&self, request: LevelRequest) -> Result<Level, ApiError> {
        let endpoint = &routes::LEVELS_CREATE;
        self.gateway.call_with(endpoint, endpoint.path, &request).await
    }

    async fn list_levels(&self, page: PageRequest) -> Result<Page<Level>, ApiError> {
        let endpoint = &routes::LEVELS_LIST;
        self.gateway.call(endpoint, &endpoint.paged(page)).await
    }

    async fn get_level(&self, id: i64) -> Result<Level, ApiError> {
        let endpoint = &routes::LEVEL_GET;
        self.gateway.call(endpoint, &endpoint.with_id(id)).await
    }

    async fn update_level(&self, id: i64, request: LevelRequest) -> Result<Level, ApiError> {
        let endpoint = &routes::LEVEL_UPDATE;
        self.gateway
            .call_with(endpoint, &endpoint.with_id(id), &request)
            .await
    }

    async fn delete_level(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = &routes::LEVEL_DELETE;
        self.gateway.call_unit(endpoint, &endpoint.with_id(id)).await
    }

    // ===== Question types =====

    async fn create_question_type(
        &self,
        request: QuestionTypeRequest,
    ) -> Result<QuestionType, ApiError> {
        let endpoint = &routes::QUESTION_TYPES_CREATE;
        self.gateway.call_with(endpoint, endpoint.path, &request).await
    }

    async fn list_question_types(
        &self,
        page: PageRequest,
    ) -> Result<Page<QuestionType>, ApiError> {
        let endpoint = &routes::QUESTION_TYPES_LIST;
        self.gateway.call(endpoint, &endpoint.paged(page)).await
    }

    async fn get_question_type(&self, id: i64) -> Result<QuestionType, ApiError> {
        let endpoint = &routes::QUESTION_TYPE_GET;
        self.gateway.call(endpoint, &endpoint.with_id(id)).await
    }

    async fn update_question_type(
        &self,
        id: i64,
        request: QuestionTypeRequest,
    ) -> Result<QuestionType, ApiError> {
        let endpoint = &routes::QUESTION_TYPE_UPDATE;
        self.gateway
            .call_with(endpoint, &endpoint.with_id(id), &request)
            .await
    }

    async fn delete_question_type(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = &routes::QUESTION_TYPE_DELETE;
        self.gateway.call_unit(endpoint, &endpoint.with_id(id)).await
    }

    // ===== Questions =====

    async fn create_question(&self, request: QuestionRequest) -> Result<Question, ApiError> {
        let endpoint = &routes::QUESTIONS_CREATE;
        self.gateway.call_with(endpoint, endpoint.path, &request).await
    }

    async fn list_questions(&self, page: PageRequest) -> Result<Page<Question>, ApiError> {
        let endpoint = &routes::QUESTIONS_LIST;
        self.gateway.call(endpoint, &endpoint.paged(page)).await
    }

    async fn get_question(&self, id: i64) -> Result<Question, ApiError> {
        let endpoint = &routes::QUESTION_GET;
        self.gateway.call(endpoint, &endpoint.with_id(id)).await
    }

    async fn update_question(
        &self,
        id: i64,
        request: QuestionRequest,
    ) -> Result<Question, ApiError> {
        let endpoint = &routes::QUESTION_UPDATE;
        self.gateway
            .call_with(endpoint, &endpoint.with_id(id), &request)
            .await
    }

    async fn delete_question(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = &routes::QUESTION_DELETE;
        self.gateway.call_unit(endpoint, &endpoint.with_id(id)).await
    }
}
