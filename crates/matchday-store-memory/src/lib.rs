//! In-memory Store backend.
//!
//! This implementation is suitable for:
//! - Tests and single-process runs
//! - A reference for the document-database contract a remote backend must honor
//!
//! State is process-local; nothing survives a restart.

use std::sync::Mutex;

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use matchday_storage::{
    CreateMatchParams, Match, MatchId, Message, MessageId, NewMessage, PrincipalId, Profile,
    ProfileFilter, SkillLevel, Store, StoreError,
};

/// In-memory document store over concurrent maps.
///
/// `join_match` performs its capacity/duplicate check and the append while
/// holding the match entry's lock, so two racing joins cannot both observe
/// a free slot.
#[derive(Default)]
pub struct MemoryStore {
    profiles: DashMap<PrincipalId, Profile>,
    matches: DashMap<MatchId, Match>,
    // Append-only log; list_thread filters and orders from here.
    messages: Mutex<Vec<Message>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn get_profile(&self, id: &PrincipalId) -> Result<Profile, StoreError> {
        self.profiles
            .get(id)
            .map(|p| p.clone())
            .ok_or(StoreError::NotFound)
    }

    async fn list_profiles(&self, filter: &ProfileFilter) -> Result<Vec<Profile>, StoreError> {
        Ok(self
            .profiles
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn list_pending_approval(&self) -> Result<Vec<Profile>, StoreError> {
        Ok(self
            .profiles
            .iter()
            .filter(|entry| {
                entry.level == SkillLevel::Advanced && !entry.approved_advanced
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn approve_advanced(&self, id: &PrincipalId) -> Result<(), StoreError> {
        let mut profile = self.profiles.get_mut(id).ok_or(StoreError::NotFound)?;
        profile.approved_advanced = true;
        Ok(())
    }

    async fn reject_advanced(&self, id: &PrincipalId) -> Result<(), StoreError> {
        let mut profile = self.profiles.get_mut(id).ok_or(StoreError::NotFound)?;
        profile.approved_advanced = false;
        profile.level = SkillLevel::Intermediate;
        profile.image_url = None;
        Ok(())
    }

    async fn create_match(&self, params: &CreateMatchParams) -> Result<Match, StoreError> {
        let m = Match {
            id: MatchId(Uuid::new_v4()),
            sport: params.sport,
            location: params.location.clone(),
            starts_at: params.starts_at,
            created_by: params.created_by,
            players: vec![params.created_by],
            max_players: params.sport.max_players(),
            level: params.level,
            created_at: Utc::now(),
        };
        self.matches.insert(m.id, m.clone());
        Ok(m)
    }

    async fn get_match(&self, id: &MatchId) -> Result<Match, StoreError> {
        self.matches
            .get(id)
            .map(|m| m.clone())
            .ok_or(StoreError::NotFound)
    }

    async fn list_matches(&self) -> Result<Vec<Match>, StoreError> {
        Ok(self.matches.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn join_match(&self, id: &MatchId, player: &PrincipalId) -> Result<(), StoreError> {
        // get_mut holds the entry lock across check and append.
        let mut m = self.matches.get_mut(id).ok_or(StoreError::NotFound)?;
        if m.has_player(player) {
            return Err(StoreError::AlreadyJoined);
        }
        if m.is_full() {
            return Err(StoreError::MatchFull);
        }
        m.players.push(*player);
        Ok(())
    }

    async fn leave_match(&self, id: &MatchId, player: &PrincipalId) -> Result<(), StoreError> {
        let mut m = self.matches.get_mut(id).ok_or(StoreError::NotFound)?;
        m.players.retain(|p| p != player);
        Ok(())
    }

    async fn append_message(&self, message: &NewMessage) -> Result<Message, StoreError> {
        let stored = Message {
            id: MessageId(Uuid::new_v4()),
            from: message.from,
            to: message.to,
            text: message.text.clone(),
            sent_at: Utc::now(),
        };
        let mut log = self
            .messages
            .lock()
            .map_err(|_| StoreError::Backend("message log lock poisoned".to_string()))?;
        log.push(stored.clone());
        Ok(stored)
    }

    async fn list_thread(
        &self,
        a: &PrincipalId,
        b: &PrincipalId,
    ) -> Result<Vec<Message>, StoreError> {
        let log = self
            .messages
            .lock()
            .map_err(|_| StoreError::Backend("message log lock poisoned".to_string()))?;
        let mut thread: Vec<Message> = log
            .iter()
            .filter(|m| m.in_thread(a, b))
            .cloned()
            .collect();
        // Stable sort keeps append order for identical timestamps.
        thread.sort_by_key(|m| m.sent_at);
        Ok(thread)
    }
}
