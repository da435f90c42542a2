//! Match operations: schedule, list upcoming, join/leave, player names.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::info;

use matchday_identity::{AuthContext, AuthError};
use matchday_storage::{
    CreateMatchParams, Match, MatchId, MatchLevel, PrincipalId, Profile, Sport, StoreError,
};

use crate::error::ServiceError;
use crate::service::Matchday;

/// What the scheduling form submits. Date and time arrive as the two
/// separate text fields the form collects.
#[derive(Clone, Debug)]
pub struct MatchDraft {
    pub sport: Sport,
    pub location: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24h
    pub time: String,
    pub advanced_only: bool,
}

impl MatchDraft {
    /// Parse the two form fields into one UTC instant. A parse failure of
    /// either field is a validation error.
    fn starts_at(&self) -> Result<DateTime<Utc>, ServiceError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            ServiceError::Validation("invalid date, expected YYYY-MM-DD".to_string())
        })?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M").map_err(|_| {
            ServiceError::Validation("invalid time, expected HH:MM".to_string())
        })?;
        Ok(Utc.from_utc_datetime(&date.and_time(time)))
    }
}

impl Matchday {
    /// Schedule a match. The caller is auto-enrolled as the first player;
    /// capacity comes from the sport's fixed table; advanced-only requires
    /// the caller's profile to hold advanced approval.
    pub async fn schedule_match(
        &self,
        ctx: &AuthContext,
        draft: MatchDraft,
    ) -> Result<Match, ServiceError> {
        if draft.location.trim().is_empty() {
            return Err(ServiceError::Validation("location is required".to_string()));
        }
        let starts_at = draft.starts_at()?;
        if starts_at <= Utc::now() {
            return Err(ServiceError::Validation(
                "match cannot be scheduled in the past".to_string(),
            ));
        }

        let level = if draft.advanced_only {
            if !self.is_approved_advanced(ctx).await? {
                return Err(ServiceError::Validation(
                    "advanced-only matches require an approved Advanced profile".to_string(),
                ));
            }
            MatchLevel::Advanced
        } else {
            MatchLevel::All
        };

        let created = self
            .store
            .create_match(&CreateMatchParams {
                sport: draft.sport,
                location: draft.location.trim().to_string(),
                starts_at,
                created_by: ctx.principal.id,
                level,
            })
            .await?;
        info!(
            match_id = %created.id.0,
            sport = %created.sport,
            creator = %ctx.principal.id.0,
            "match scheduled"
        );
        Ok(created)
    }

    /// Matches the caller may see: future-dated, advanced-gated, optionally
    /// narrowed to one sport. Order follows store iteration order.
    pub async fn upcoming_matches(
        &self,
        ctx: &AuthContext,
        sport: Option<Sport>,
    ) -> Result<Vec<Match>, ServiceError> {
        let approved = self.is_approved_advanced(ctx).await?;
        let now = Utc::now();
        let all = self.store.list_matches().await?;
        let visible = matchday_rules::filter_visible(&all, approved, now);
        Ok(matchday_rules::filter_by_sport(&visible, sport)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Join a match. Advanced matches are joinable only with approval; the
    /// store enforces capacity and the no-double-join rule atomically.
    pub async fn join_match(&self, ctx: &AuthContext, id: &MatchId) -> Result<(), ServiceError> {
        let m = self.store.get_match(id).await?;
        if m.level == MatchLevel::Advanced && !self.is_approved_advanced(ctx).await? {
            return Err(ServiceError::Auth(AuthError::Forbidden));
        }
        self.store.join_match(id, &ctx.principal.id).await?;
        info!(match_id = %id.0, principal = %ctx.principal.id.0, "joined match");
        Ok(())
    }

    /// Leave a match. Leaving a match the caller never joined is a no-op.
    pub async fn leave_match(&self, ctx: &AuthContext, id: &MatchId) -> Result<(), ServiceError> {
        self.store.leave_match(id, &ctx.principal.id).await?;
        info!(match_id = %id.0, principal = %ctx.principal.id.0, "left match");
        Ok(())
    }

    /// Display names of a match's players in join order. Players whose
    /// profile has gone missing are skipped; backend failures propagate.
    pub async fn player_names(
        &self,
        _ctx: &AuthContext,
        id: &MatchId,
    ) -> Result<Vec<String>, ServiceError> {
        let m = self.store.get_match(id).await?;

        let mut lookup: HashMap<PrincipalId, Profile> = HashMap::new();
        for player in &m.players {
            match self.store.get_profile(player).await {
                Ok(profile) => {
                    lookup.insert(*player, profile);
                }
                Err(StoreError::NotFound) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(matchday_rules::resolve_player_names(&m, &lookup))
    }
}
