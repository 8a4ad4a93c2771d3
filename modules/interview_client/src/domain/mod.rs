//! Domain layer - session capabilities the gateway depends on

pub mod listener;
pub mod token_store;

pub use listener::{NoOpSessionListener, SessionListener};
pub use token_store::{StoreError, TokenStore};
