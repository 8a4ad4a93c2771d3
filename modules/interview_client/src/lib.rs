//! Interview Platform Client
//!
//! Typed client for the interview platform gateway: authentication, the
//! question bank and its taxonomy, user administration, exams, news and
//! careers. Every call resolves to decoded JSON or a normalized
//! [`ApiError`] carrying the server's `detail` message, the HTTP status
//! (0 when no response arrived) and the raw error payload.

// Public exports
pub mod contract;
pub use contract::{
    client::{AuthApi, CareerApi, ExamApi, NewsApi, QuestionApi, UserApi},
    error::{ApiError, ErrorKind},
    Page, PageRequest,
};

pub mod sdk;
pub use sdk::InterviewClient;

pub mod bindings;
pub mod config;
pub use config::ClientConfig;

pub mod domain;
pub use domain::{NoOpSessionListener, SessionListener, TokenStore};

pub mod api;
pub use api::http::{BuildError, GatewayClient, HttpMethod};

#[doc(hidden)]
pub mod infra;
pub use infra::storage::{FileTokenStore, InMemoryTokenStore};
