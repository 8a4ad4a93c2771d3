//! Token store implementations

pub mod file;
pub mod memory;

pub use file::{default_session_path, FileTokenStore};
pub use memory::InMemoryTokenStore;
