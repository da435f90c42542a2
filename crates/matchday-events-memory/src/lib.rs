//! In-memory message feed using tokio broadcast channels.
//!
//! Events are only delivered within a single process. Every participant id
//! gets its own broadcast channel; publishing fans out to both endpoints of
//! the message, and a thread subscription filters its own channel down to
//! the exact pair it was opened for.

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use matchday_events::{FeedError, MessageFeed, ThreadSubscription};
use matchday_storage::{Message, PrincipalId};

const CHANNEL_CAPACITY: usize = 100;

/// In-memory feed, one broadcast channel per participant.
///
/// A lagged receiver skips the missed messages (broadcast semantics); a
/// client that falls behind should reload the thread backlog from the store.
#[derive(Default)]
pub struct MemoryMessageFeed {
    channels: DashMap<PrincipalId, broadcast::Sender<Message>>,
}

impl MemoryMessageFeed {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_or_create_channel(&self, id: &PrincipalId) -> broadcast::Sender<Message> {
        self.channels
            .entry(*id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }
}

#[async_trait]
impl MessageFeed for MemoryMessageFeed {
    async fn publish(&self, message: &Message) -> Result<(), FeedError> {
        // A send error just means nobody is subscribed on that side.
        let _ = self.get_or_create_channel(&message.from).send(message.clone());
        if message.to != message.from {
            let _ = self.get_or_create_channel(&message.to).send(message.clone());
        }
        Ok(())
    }

    async fn subscribe_thread(
        &self,
        me: &PrincipalId,
        other: &PrincipalId,
    ) -> Result<ThreadSubscription, FeedError> {
        let rx = self.get_or_create_channel(me).subscribe();
        let me = *me;
        let other = *other;

        // Drop lagged errors and everything outside the pair.
        let stream = BroadcastStream::new(rx).filter_map(move |result| {
            result.ok().filter(|msg| msg.in_thread(&me, &other))
        });

        Ok(ThreadSubscription::new(Box::pin(stream)))
    }
}
