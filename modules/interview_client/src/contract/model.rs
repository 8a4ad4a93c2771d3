//! Contract models for the interview platform API
//!
//! These are the wire shapes exchanged with the gateway (camelCase JSON).
//! Response models keep any field they do not name in `extra`, so a decoded
//! value never loses data the server sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default page index for list endpoints
pub const DEFAULT_PAGE: u32 = 0;
/// Default page size for list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ===== Pagination =====

/// Zero-based pagination parameters (`?page=&size=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Render as a query string without the leading `?`.
    pub fn to_query(&self) -> String {
        format!("page={}&size={}", self.page, self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Fixed envelope around every paginated list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub number_of_elements: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size: 0,
            number: 0,
            first: true,
            last: true,
            number_of_elements: 0,
        }
    }
}

/// Resources addressable by a numeric id
pub trait HasId {
    fn id(&self) -> i64;
}

macro_rules! impl_has_id {
    ($($ty:ty),* $(,)?) => {
        $(impl HasId for $ty {
            fn id(&self) -> i64 {
                self.id
            }
        })*
    };
}

// ===== Authentication =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role_name: String,
    pub full_name: String,
    /// ISO date, e.g. `2000-01-31`
    pub date_of_birth: String,
    pub address: String,
    pub is_studying: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Issued by login, registration, refresh and email verification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Profile of the authenticated user (`/auth/user-info`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role_name: Option<String>,
    pub status: Option<String>,
    pub elo_score: Option<i64>,
    pub elo_rank: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ===== Questions & taxonomy =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub user_id: Option<i64>,
    pub topic_id: Option<i64>,
    pub field_id: Option<i64>,
    pub level_id: Option<i64>,
    pub question_type_id: Option<i64>,
    pub question_content: Option<String>,
    pub question_answer: Option<String>,
    pub similarity_score: Option<f64>,
    pub status: Option<String>,
    pub language: Option<String>,
    pub created_at: Option<String>,
    pub approved_at: Option<String>,
    pub approved_by: Option<i64>,
    pub useful_vote: Option<i64>,
    pub unuseful_vote: Option<i64>,
    pub field_name: Option<String>,
    pub topic_name: Option<String>,
    pub level_name: Option<String>,
    pub question_type_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub user_id: i64,
    pub topic_id: i64,
    pub field_id: i64,
    pub level_id: i64,
    pub question_type_id: i64,
    pub content: String,
    pub answer: String,
    pub language: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: i64,
    pub field_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRequest {
    pub field_id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub min_score: Option<i64>,
    pub max_score: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRequest {
    pub name: String,
    pub description: String,
    pub min_score: i64,
    pub max_score: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionType {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionTypeRequest {
    pub name: String,
    pub description: String,
}

// ===== Users =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub role_id: Option<i64>,
    pub role_name: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub is_studying: Option<bool>,
    pub elo_score: Option<i64>,
    pub elo_rank: Option<String>,
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdateRequest {
    pub role_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

// ===== Exams =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i64>,
    pub max_score: Option<i64>,
    #[serde(default)]
    pub question_ids: Vec<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRequest {
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub max_score: i64,
    pub question_ids: Vec<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ===== News =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ===== Careers =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerRequest {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: String,
    pub location: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl_has_id!(UserInfo, Question, Field, Topic, Level, QuestionType, User, Exam, News, Career);
