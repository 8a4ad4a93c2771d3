//! Entry point for applications
//!
//! [`InterviewClient`] owns one [`GatewayClient`] and hands out the
//! per-domain service clients and observer bindings, all sharing the same
//! token. Several independent clients may coexist in one process.

use crate::api::http::{
    AuthClient, BuildError, CareerClient, ExamClient, GatewayClient, GatewayClientBuilder,
    NewsClient, QuestionClient, UserClient,
};
use crate::bindings::{
    AuthSession, FieldsView, LevelsView, QuestionTypesView, QuestionsView, TopicsView, UsersView,
};
use crate::config::ClientConfig;
use crate::contract::{ApiError, PageRequest};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct InterviewClient {
    gateway: Arc<GatewayClient>,
}

impl InterviewClient {
    /// Client with the default token store and no-op session listener.
    pub fn new(config: ClientConfig) -> Result<Self, BuildError> {
        Ok(Self::from_gateway(GatewayClient::new(config)?))
    }

    /// Start from a gateway builder to plug in a token store or listener.
    pub fn builder(config: ClientConfig) -> GatewayClientBuilder {
        GatewayClient::builder(config)
    }

    pub fn from_gateway(gateway: GatewayClient) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    pub fn gateway(&self) -> &Arc<GatewayClient> {
        &self.gateway
    }

    pub fn token(&self) -> Option<String> {
        self.gateway.token()
    }

    pub fn set_token(&self, token: Option<String>) {
        self.gateway.set_token(token);
    }

    pub fn is_authenticated(&self) -> bool {
        self.gateway.is_authenticated()
    }

    /// Untyped request; see [`GatewayClient::request`].
    pub async fn request(
        &self,
        route: &str,
        method: crate::api::http::HttpMethod,
        body: Option<&Value>,
        requires_auth: bool,
    ) -> Result<Value, ApiError> {
        self.gateway
            .request(route, method, body, requires_auth)
            .await
    }

    // ===== Services =====

    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.gateway.clone())
    }

    pub fn questions(&self) -> QuestionClient {
        QuestionClient::new(self.gateway.clone())
    }

    pub fn users(&self) -> UserClient {
        UserClient::new(self.gateway.clone())
    }

    pub fn exams(&self) -> ExamClient {
        ExamClient::new(self.gateway.clone())
    }

    pub fn news(&self) -> NewsClient {
        NewsClient::new(self.gateway.clone())
    }

    pub fn careers(&self) -> CareerClient {
        CareerClient::new(self.gateway.clone())
    }

    // ===== Bindings =====

    pub fn auth_session(&self) -> AuthSession {
        AuthSession::new(Arc::new(self.auth()))
    }

    pub fn questions_view(&self, page: PageRequest) -> QuestionsView {
        QuestionsView::new(Arc::new(self.questions()), page)
    }

    pub fn fields_view(&self, page: PageRequest) -> FieldsView {
        FieldsView::new(Arc::new(self.questions()), page)
    }

    pub fn topics_view(&self, page: PageRequest) -> TopicsView {
        TopicsView::new(Arc::new(self.questions()), page)
    }

    pub fn levels_view(&self, page: PageRequest) -> LevelsView {
        LevelsView::new(Arc::new(self.questions()), page)
    }

    pub fn question_types_view(&self, page: PageRequest) -> QuestionTypesView {
        QuestionTypesView::new(Arc::new(self.questions()), page)
    }

    pub fn users_view(&self, page: PageRequest) -> UsersView {
        UsersView::new(Arc::new(self.users()), page)
    }
}

impl From<GatewayClient> for InterviewClient {
    fn from(gateway: GatewayClient) -> Self {
        Self::from_gateway(gateway)
    }
}
