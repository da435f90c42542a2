//! The Matchday service struct and shared helpers.

use std::sync::Arc;

use matchday_events::MessageFeed;
use matchday_identity::{AuthContext, AuthError, IdentityProvider};
use matchday_media::MediaStore;
use matchday_storage::{Store, StoreError};

use crate::config::CoreConfig;
use crate::error::ServiceError;

/// The service core. Holds every external seam behind a trait object so
/// backends can be swapped without touching the operations.
#[derive(Clone)]
pub struct Matchday {
    pub(crate) store: Arc<dyn Store>,
    pub(crate) feed: Arc<dyn MessageFeed>,
    pub(crate) identity: Arc<dyn IdentityProvider>,
    pub(crate) media: Arc<dyn MediaStore>,
    pub(crate) config: CoreConfig,
}

impl Matchday {
    pub fn new(
        store: Arc<dyn Store>,
        feed: Arc<dyn MessageFeed>,
        identity: Arc<dyn IdentityProvider>,
        media: Arc<dyn MediaStore>,
        config: CoreConfig,
    ) -> Self {
        Self {
            store,
            feed,
            identity,
            media,
            config,
        }
    }

    /// Admin operations are gated on the configured email allowlist.
    pub(crate) fn require_admin(&self, ctx: &AuthContext) -> Result<(), ServiceError> {
        if self.config.is_admin(&ctx.principal.email) {
            Ok(())
        } else {
            Err(ServiceError::Auth(AuthError::Forbidden))
        }
    }

    /// Whether the caller holds advanced approval. A principal without a
    /// profile has not been approved for anything.
    pub(crate) async fn is_approved_advanced(
        &self,
        ctx: &AuthContext,
    ) -> Result<bool, ServiceError> {
        match self.store.get_profile(&ctx.principal.id).await {
            Ok(profile) => Ok(profile.approved_advanced),
            Err(StoreError::NotFound) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
