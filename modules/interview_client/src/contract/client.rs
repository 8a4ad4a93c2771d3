//! Service traits for the interview platform API
//!
//! One trait per backend domain. Each method maps to exactly one HTTP
//! request; implementations live in `api::http`. Callers depend on these
//! traits so tests and hosts can substitute their own implementations.

use super::{
    error::ApiError,
    model::{
        Career, CareerRequest, Exam, ExamRequest, Field, FieldRequest, Level, LevelRequest, News,
        NewsRequest, Page, PageRequest, Question, QuestionRequest, QuestionType,
        QuestionTypeRequest, RegisterRequest, TokenResponse, Topic, TopicRequest, User, UserInfo,
    },
};
use async_trait::async_trait;

/// Authentication endpoints (`/auth`)
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Register a new account. Stores the returned access token, if any.
    async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, ApiError>;

    /// Log in with email and password. Stores the returned access token.
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError>;

    /// Profile of the currently authenticated user
    async fn user_info(&self) -> Result<UserInfo, ApiError>;

    /// Exchange a refresh token for a new access token. Stores the new token.
    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse, ApiError>;

    /// Confirm an email address with the token sent by mail. The current
    /// token is left untouched; pass the returned access token to
    /// `set_token` to sign in.
    async fn verify_email(&self, verify_token: &str) -> Result<TokenResponse, ApiError>;

    /// Drop the current token locally. No request is made.
    fn logout(&self);
}

/// Question bank and taxonomy endpoints (`/questions`)
#[async_trait]
pub trait QuestionApi: Send + Sync {
    // ===== Fields =====
    async fn create_field(&self, request: FieldRequest) -> Result<Field, ApiError>;
    async fn list_fields(&self, page: PageRequest) -> Result<Page<Field>, ApiError>;
    async fn get_field(&self, id: i64) -> Result<Field, ApiError>;
    async fn update_field(&self, id: i64, request: FieldRequest) -> Result<Field, ApiError>;
    async fn delete_field(&self, id: i64) -> Result<(), ApiError>;

    // ===== Topics =====
    async fn create_topic(&self, request: TopicRequest) -> Result<Topic, ApiError>;
    async fn list_topics(&self, page: PageRequest) -> Result<Page<Topic>, ApiError>;
    async fn get_topic(&self, id: i64) -> Result<Topic, ApiError>;
    async fn update_topic(&self, id: i64, request: TopicRequest) -> Result<Topic, ApiError>;
    async fn delete_topic(&self, id: i64) -> Result<(), ApiError>;

    // ===== Levels =====
    async fn create_level(&self, request: LevelRequest) -> Result<Level, ApiError>;
    async fn list_levels(&self, page: PageRequest) -> Result<Page<Level>, ApiError>;
    async fn get_level(&self, id: i64) -> Result<Level, ApiError>;
    async fn update_level(&self, id: i64, request: LevelRequest) -> Result<Level, ApiError>;
    async fn delete_level(&self, id: i64) -> Result<(), ApiError>;

    // ===== Question types =====
    async fn create_question_type(
        &self,
        request: QuestionTypeRequest,
    ) -> Result<QuestionType, ApiError>;
    async fn list_question_types(&self, page: PageRequest)
        -> Result<Page<QuestionType>, ApiError>;
    async fn get_question_type(&self, id: i64) -> Result<QuestionType, ApiError>;
    async fn update_question_type(
        &self,
        id: i64,
        request: QuestionTypeRequest,
    ) -> Result<QuestionType, ApiError>;
    async fn delete_question_type(&self, id: i64) -> Result<(), ApiError>;

    // ===== Questions =====
    async fn create_question(&self, request: QuestionRequest) -> Result<Question, ApiError>;
    async fn list_questions(&self, page: PageRequest) -> Result<Page<Question>, ApiError>;
    async fn get_question(&self, id: i64) -> Result<Question, ApiError>;
    async fn update_question(
        &self,
        id: i64,
        request: QuestionRequest,
    ) -> Result<Question, ApiError>;
    async fn delete_question(&self, id: i64) -> Result<(), ApiError>;
}

/// User administration endpoints (`/users`)
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list_users(&self, page: PageRequest) -> Result<Page<User>, ApiError>;
    async fn get_user(&self, id: i64) -> Result<User, ApiError>;
    async fn update_user_role(&self, id: i64, role_id: i64) -> Result<User, ApiError>;
    async fn update_user_status(&self, id: i64, status: &str) -> Result<User, ApiError>;
}

/// Exam endpoints (`/exams`)
#[async_trait]
pub trait ExamApi: Send + Sync {
    async fn create_exam(&self, request: ExamRequest) -> Result<Exam, ApiError>;
    async fn list_exams(&self, page: PageRequest) -> Result<Page<Exam>, ApiError>;
    async fn get_exam(&self, id: i64) -> Result<Exam, ApiError>;
    async fn update_exam(&self, id: i64, request: ExamRequest) -> Result<Exam, ApiError>;
    async fn delete_exam(&self, id: i64) -> Result<(), ApiError>;
}

/// News endpoints (`/news`)
#[async_trait]
pub trait NewsApi: Send + Sync {
    async fn create_news(&self, request: NewsRequest) -> Result<News, ApiError>;
    async fn list_news(&self, page: PageRequest) -> Result<Page<News>, ApiError>;
    async fn get_news(&self, id: i64) -> Result<News, ApiError>;
    async fn update_news(&self, id: i64, request: NewsRequest) -> Result<News, ApiError>;
    async fn delete_news(&self, id: i64) -> Result<(), ApiError>;
}

/// Career endpoints (`/careers`)
#[async_trait]
pub trait CareerApi: Send + Sync {
    async fn create_career(&self, request: CareerRequest) -> Result<Career, ApiError>;
    async fn list_careers(&self, page: PageRequest) -> Result<Page<Career>, ApiError>;
    async fn get_career(&self, id: i64) -> Result<Career, ApiError>;
}
