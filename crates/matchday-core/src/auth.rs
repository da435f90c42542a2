//! Auth passthrough: sign-up, sign-in, sign-out.

use matchday_identity::AuthContext;
use tracing::info;

use crate::error::ServiceError;
use crate::service::Matchday;

impl Matchday {
    /// Create an account and return the context the caller passes into
    /// every subsequent operation.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthContext, ServiceError> {
        let ctx = self.identity.sign_up(email, password).await?;
        info!(principal = %ctx.principal.id.0, "signed up");
        Ok(ctx)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthContext, ServiceError> {
        let ctx = self.identity.sign_in(email, password).await?;
        info!(principal = %ctx.principal.id.0, "signed in");
        Ok(ctx)
    }

    pub async fn sign_out(&self, ctx: &AuthContext) -> Result<(), ServiceError> {
        self.identity.sign_out(ctx).await?;
        info!(principal = %ctx.principal.id.0, "signed out");
        Ok(())
    }
}
