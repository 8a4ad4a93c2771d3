//! Observer bindings for UI hosts
//!
//! Stateful wrappers over the service traits. Every operation flips
//! `loading`, clears `error`, records the failure message when it fails and
//! still hands the [`ApiError`](crate::contract::ApiError) back to the
//! caller. State is published over `tokio::sync::watch`.

pub mod auth;
pub mod collection;
pub mod state;
pub mod views;

pub use auth::{AuthSession, SessionData};
pub use collection::{Collection, CollectionData};
pub use state::{ResourceState, StateCell};
pub use views::{FieldsView, LevelsView, QuestionTypesView, QuestionsView, TopicsView, UsersView};
