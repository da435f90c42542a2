//! Direct-message operations: send, open a live thread.

use tracing::info;

use matchday_events::ThreadSubscription;
use matchday_identity::AuthContext;
use matchday_storage::{Message, NewMessage, PrincipalId};

use crate::error::ServiceError;
use crate::service::Matchday;

impl Matchday {
    /// Send a direct message. Text is trimmed; empty-after-trim is
    /// rejected. Returns the stored record — failures are the caller's to
    /// handle, not logged away.
    pub async fn send_message(
        &self,
        ctx: &AuthContext,
        to: &PrincipalId,
        text: &str,
    ) -> Result<Message, ServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ServiceError::Validation(
                "message text cannot be empty".to_string(),
            ));
        }

        let stored = self
            .store
            .append_message(&NewMessage {
                from: ctx.principal.id,
                to: *to,
                text: text.to_string(),
            })
            .await?;
        self.feed.publish(&stored).await?;
        info!(message_id = %stored.id.0, from = %stored.from.0, to = %stored.to.0, "message sent");
        Ok(stored)
    }

    /// Open the thread with another principal: the stored backlog in
    /// ascending timestamp order, plus a live subscription for whatever
    /// arrives next. The caller cancels (or drops) the subscription when
    /// the view goes away.
    pub async fn open_thread(
        &self,
        ctx: &AuthContext,
        with: &PrincipalId,
    ) -> Result<(Vec<Message>, ThreadSubscription), ServiceError> {
        // Subscribe before reading the backlog so nothing falls in between;
        // a message racing the open shows up in the live stream.
        let subscription = self.feed.subscribe_thread(&ctx.principal.id, with).await?;
        let backlog = self.store.list_thread(&ctx.principal.id, with).await?;
        Ok((backlog, subscription))
    }
}
