//! Common test helpers: a service wired to the in-memory backends, plus
//! sign-up/profile shortcuts.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};

use matchday_core::{CoreConfig, MatchDraft, Matchday, ProfileDraft};
use matchday_events_memory::MemoryMessageFeed;
use matchday_identity::{AuthContext, MemoryIdentity};
use matchday_media::MemoryMediaStore;
use matchday_storage::{Profile, SkillLevel, Sport};
use matchday_store_memory::MemoryStore;

pub fn test_service() -> Matchday {
    test_service_with_config(CoreConfig::default())
}

pub fn test_service_with_admin(admin_email: &str) -> Matchday {
    test_service_with_config(CoreConfig {
        admin_emails: vec![admin_email.to_lowercase()],
        ..CoreConfig::default()
    })
}

pub fn test_service_with_config(config: CoreConfig) -> Matchday {
    let identity = MemoryIdentity::with_min_password_len(config.min_password_len);
    Matchday::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryMessageFeed::new()),
        Arc::new(identity),
        Arc::new(MemoryMediaStore::new()),
        config,
    )
}

pub async fn sign_up(service: &Matchday, email: &str) -> AuthContext {
    service.sign_up(email, "racket42").await.unwrap()
}

pub async fn complete_profile(
    service: &Matchday,
    ctx: &AuthContext,
    name: &str,
    sport: Sport,
    level: SkillLevel,
) -> Profile {
    service
        .save_profile(
            ctx,
            ProfileDraft {
                name: name.to_string(),
                sport,
                level,
                badge_image: None,
            },
        )
        .await
        .unwrap()
}

/// A draft one day in the future; always schedulable.
pub fn future_draft(sport: Sport, advanced_only: bool) -> MatchDraft {
    let tomorrow = Utc::now() + Duration::days(1);
    MatchDraft {
        sport,
        location: "City Park".to_string(),
        date: tomorrow.format("%Y-%m-%d").to_string(),
        time: tomorrow.format("%H:%M").to_string(),
        advanced_only,
    }
}
