//! Caller-facing error taxonomy.
//!
//! Every operation either succeeds or fails with one of these kinds; none
//! auto-retry, and nothing is swallowed. Display strings are suitable for
//! direct user display.

use thiserror::Error;

use matchday_events::FeedError;
use matchday_identity::AuthError;
use matchday_media::MediaError;
use matchday_storage::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Bad or missing input: empty fields, malformed date/time, past
    /// date/time, empty message text, ineligible advanced-only request.
    #[error("{0}")]
    Validation(String),

    /// Identity failure, or a caller without the required privilege.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The match is full.
    #[error("match is full")]
    Capacity,

    /// The principal already joined this match.
    #[error("already joined this match")]
    Duplicate,

    /// The referenced profile or match does not exist.
    #[error("not found")]
    NotFound,

    /// The backend call failed (network, permission, quota).
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::AlreadyJoined | StoreError::AlreadyExists => ServiceError::Duplicate,
            StoreError::MatchFull => ServiceError::Capacity,
            StoreError::Backend(msg) => ServiceError::Backend(msg),
        }
    }
}

impl From<FeedError> for ServiceError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::Backend(msg) => ServiceError::Backend(msg),
        }
    }
}

impl From<MediaError> for ServiceError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Backend(msg) => ServiceError::Backend(msg),
        }
    }
}
