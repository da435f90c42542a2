//! Service core for matchday.
//!
//! Ties the seams together — [`matchday_storage::Store`],
//! [`matchday_events::MessageFeed`], [`matchday_identity::IdentityProvider`],
//! [`matchday_media::MediaStore`] — behind one [`Matchday`] service with the
//! caller-facing error taxonomy. Every operation that acts on behalf of a
//! principal takes an explicit [`matchday_identity::AuthContext`]; there is
//! no ambient session.
//!
//! Operation modules:
//! - auth: sign-up, sign-in, sign-out passthrough
//! - profiles: save/get/browse, admin review (pending/approve/reject)
//! - matches: schedule, upcoming listing, join/leave, player names
//! - messages: send, open a live thread

mod auth;
mod config;
mod error;
mod matches;
mod messages;
mod profiles;
mod service;

pub use config::{ConfigError, CoreConfig};
pub use error::ServiceError;
pub use matches::MatchDraft;
pub use profiles::ProfileDraft;
pub use service::Matchday;
