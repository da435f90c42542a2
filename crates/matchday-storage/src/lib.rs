//! Storage abstraction for matchday.
//!
//! Backend crates (e.g., matchday-store-memory) implement the [`Store`] trait so
//! the service core doesn't depend on any specific document database or its
//! schema details.

use thiserror::Error;

mod store;
mod types;

pub use store::Store;
pub use types::*;

/// Uniform error type for all storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    AlreadyExists,
    #[error("already joined")]
    AlreadyJoined,
    #[error("match full")]
    MatchFull,
    #[error("backend error: {0}")]
    Backend(String),
}
