//! HTTP transport: the gateway client, route catalog and one client per
//! service domain

pub mod auth;
pub mod careers;
pub mod exams;
pub mod gateway;
pub mod news;
pub mod problem;
pub mod questions;
pub mod routes;
pub mod users;

pub use auth::AuthClient;
pub use careers::CareerClient;
pub use exams::ExamClient;
pub use gateway::{BuildError, GatewayClient, GatewayClientBuilder};
pub use news::NewsClient;
pub use problem::ErrorResponse;
pub use questions::QuestionClient;
pub use routes::{Endpoint, HttpMethod};
pub use users::UserClient;
