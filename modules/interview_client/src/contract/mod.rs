//! Contract layer - public API of the interview client
//!
//! Service traits, wire models and the normalized error type. Nothing in
//! this layer knows about HTTP.

pub mod client;
pub mod error;
pub mod model;

pub use client::{AuthApi, CareerApi, ExamApi, NewsApi, QuestionApi, UserApi};
pub use error::{ApiError, ErrorKind, TRANSPORT_STATUS};
pub use model::{
    Career, CareerRequest, Exam, ExamRequest, Field, FieldRequest, HasId, Level, LevelRequest,
    LoginRequest, News, NewsRequest, Page, PageRequest, Question, QuestionRequest, QuestionType,
    QuestionTypeRequest, RefreshRequest, RegisterRequest, RoleUpdateRequest, StatusUpdateRequest,
    TokenResponse, Topic, TopicRequest, User, UserInfo, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
