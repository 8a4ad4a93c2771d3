//! Infrastructure layer - concrete token storage

pub mod storage;
