//! The Store trait that backends implement.

use crate::types::*;
use crate::StoreError;

/// The storage trait the service core depends on.
///
/// Object safe on purpose: the core holds an `Arc<dyn Store>` so backends
/// can be swapped without touching the service layer.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    // ───────────────────────────────────── Profiles ───────────────────────────────────────

    /// Full-document overwrite keyed by the profile's principal id.
    /// Creating and replacing are the same operation.
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StoreError>;

    /// Point read by principal id.
    async fn get_profile(&self, id: &PrincipalId) -> Result<Profile, StoreError>;

    /// User directory with optional sport/level equality filters.
    async fn list_profiles(&self, filter: &ProfileFilter) -> Result<Vec<Profile>, StoreError>;

    /// Profiles awaiting review: `level == Advanced && !approved_advanced`.
    async fn list_pending_approval(&self) -> Result<Vec<Profile>, StoreError>;

    /// Field patch: set `approved_advanced = true`.
    async fn approve_advanced(&self, id: &PrincipalId) -> Result<(), StoreError>;

    /// Field patch: set `approved_advanced = false`, `level = Intermediate`,
    /// clear `image_url`. Other fields are untouched.
    async fn reject_advanced(&self, id: &PrincipalId) -> Result<(), StoreError>;

    // ───────────────────────────────────── Matches ────────────────────────────────────────

    /// Create a match with the creator auto-enrolled as the first player.
    async fn create_match(&self, params: &CreateMatchParams) -> Result<Match, StoreError>;

    /// Point read by match id.
    async fn get_match(&self, id: &MatchId) -> Result<Match, StoreError>;

    /// All matches, in store iteration order (no sort guarantee).
    async fn list_matches(&self) -> Result<Vec<Match>, StoreError>;

    /// Atomic check-and-append. Fails `AlreadyJoined` if the principal is
    /// already enrolled and `MatchFull` at capacity; the check and the
    /// append must commit under the same per-document guard.
    async fn join_match(&self, id: &MatchId, player: &PrincipalId) -> Result<(), StoreError>;

    /// Remove the principal from the player list. Removing an absent id is
    /// a no-op.
    async fn leave_match(&self, id: &MatchId, player: &PrincipalId) -> Result<(), StoreError>;

    // ───────────────────────────────────── Messages ───────────────────────────────────────

    /// Append-only insert; the store assigns id and timestamp and returns
    /// the stored record.
    async fn append_message(&self, message: &NewMessage) -> Result<Message, StoreError>;

    /// Both directions of exactly the pair `(a, b)`, ordered by `sent_at`
    /// ascending.
    async fn list_thread(
        &self,
        a: &PrincipalId,
        b: &PrincipalId,
    ) -> Result<Vec<Message>, StoreError>;
}
