//! Profile operations: save/get/browse plus the admin review queue.

use matchday_identity::AuthContext;
use matchday_storage::{PrincipalId, Profile, ProfileFilter, SkillLevel, Sport, StoreError};
use tracing::{debug, info};

use crate::error::ServiceError;
use crate::service::Matchday;

/// What the owner submits when saving their profile. The badge image is
/// raw bytes from the picker; `None` keeps the previously uploaded one.
#[derive(Clone, Debug)]
pub struct ProfileDraft {
    pub name: String,
    pub sport: Sport,
    pub level: SkillLevel,
    pub badge_image: Option<Vec<u8>>,
}

impl Matchday {
    /// Save the caller's profile: a full-document overwrite that always
    /// resets `approved_advanced` to false. Any edit revokes advanced
    /// status pending re-approval; that is policy, not an accident.
    pub async fn save_profile(
        &self,
        ctx: &AuthContext,
        draft: ProfileDraft,
    ) -> Result<Profile, ServiceError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ServiceError::Validation("name is required".to_string()));
        }

        let image_url = match draft.badge_image {
            Some(bytes) => Some(self.media.upload_badge(&ctx.principal.id, bytes).await?),
            None => match self.store.get_profile(&ctx.principal.id).await {
                Ok(existing) => existing.image_url,
                Err(StoreError::NotFound) => None,
                Err(e) => return Err(e.into()),
            },
        };

        let profile = Profile {
            id: ctx.principal.id,
            name: name.to_string(),
            sport: draft.sport,
            level: draft.level,
            image_url,
            approved_advanced: false,
            email: ctx.principal.email.clone(),
        };
        self.store.upsert_profile(&profile).await?;
        info!(principal = %ctx.principal.id.0, level = %profile.level, "profile saved");
        Ok(profile)
    }

    /// Point read; `NotFound` if the principal never completed a profile.
    pub async fn get_profile(
        &self,
        _ctx: &AuthContext,
        id: &PrincipalId,
    ) -> Result<Profile, ServiceError> {
        Ok(self.store.get_profile(id).await?)
    }

    pub async fn my_profile(&self, ctx: &AuthContext) -> Result<Profile, ServiceError> {
        Ok(self.store.get_profile(&ctx.principal.id).await?)
    }

    /// User directory with optional sport/level filters.
    pub async fn browse_profiles(
        &self,
        _ctx: &AuthContext,
        filter: ProfileFilter,
    ) -> Result<Vec<Profile>, ServiceError> {
        Ok(self.store.list_profiles(&filter).await?)
    }

    // ───────────────────────────────── Admin review ─────────────────────────────────

    /// Profiles waiting on advanced approval. Admin only.
    pub async fn pending_approvals(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<Profile>, ServiceError> {
        self.require_admin(ctx)?;
        Ok(self.store.list_pending_approval().await?)
    }

    /// Grant advanced approval. Admin only; a field patch, so a concurrent
    /// owner edit's unrelated fields are untouched.
    pub async fn approve(
        &self,
        ctx: &AuthContext,
        id: &PrincipalId,
    ) -> Result<(), ServiceError> {
        self.require_admin(ctx)?;
        self.store.approve_advanced(id).await?;
        info!(principal = %id.0, reviewer = %ctx.principal.email, "advanced approval granted");
        Ok(())
    }

    /// Reject an advanced request: clears the flag, drops the level back to
    /// Intermediate, and removes the badge image reference. Admin only.
    pub async fn reject(&self, ctx: &AuthContext, id: &PrincipalId) -> Result<(), ServiceError> {
        self.require_admin(ctx)?;
        self.store.reject_advanced(id).await?;
        debug!(principal = %id.0, reviewer = %ctx.principal.email, "advanced approval rejected");
        Ok(())
    }
}
