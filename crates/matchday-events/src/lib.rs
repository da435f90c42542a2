//! Live message-feed abstraction for direct-message threads.
//!
//! This crate defines the [`MessageFeed`] trait so different implementations
//! can back the thread view:
//! - Memory (single process, tokio broadcast channels)
//! - A remote push channel fed by the document database's live queries
//!
//! Subscriptions are explicit handles: the caller keeps the
//! [`ThreadSubscription`] for as long as it wants updates and calls
//! [`ThreadSubscription::cancel`] (or drops it) when the view goes away.
//! A feed never terminates a subscription on its own.

use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures::Stream;
use thiserror::Error;

use matchday_storage::{Message, PrincipalId};

/// Error type for feed operations
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Stream of messages in one thread, oldest first as they arrive.
pub type MessageStream = Pin<Box<dyn Stream<Item = Message> + Send>>;

/// A live subscription to one thread.
///
/// Yields every message of the pair that is published after the subscription
/// was opened. Cancelling (or dropping) the handle unsubscribes; there is no
/// teardown the caller can forget besides letting this value go.
pub struct ThreadSubscription {
    stream: MessageStream,
}

impl ThreadSubscription {
    pub fn new(stream: MessageStream) -> Self {
        Self { stream }
    }

    /// Explicitly end the subscription.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Stream for ThreadSubscription {
    type Item = Message;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Message>> {
        self.stream.as_mut().poll_next(cx)
    }
}

/// Feed trait for publishing and subscribing to direct-message threads.
#[async_trait]
pub trait MessageFeed: Send + Sync {
    /// Publish a stored message to every open subscription of its pair.
    /// Called after the store append succeeds.
    async fn publish(&self, message: &Message) -> Result<(), FeedError>;

    /// Subscribe to the thread between `me` and `other`, both directions.
    async fn subscribe_thread(
        &self,
        me: &PrincipalId,
        other: &PrincipalId,
    ) -> Result<ThreadSubscription, FeedError>;
}
