//! Match types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchId, PrincipalId, Sport};

/// Who may see and join a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchLevel {
    /// Open to every principal.
    All,
    /// Visible and joinable only by approved-advanced principals.
    Advanced,
}

/// Scheduled match record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub sport: Sport,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub created_by: PrincipalId,
    /// Insertion order is join order. No duplicates; length never exceeds
    /// `max_players`.
    pub players: Vec<PrincipalId>,
    /// Derived from the sport's capacity table at creation time.
    pub max_players: usize,
    pub level: MatchLevel,
    pub created_at: DateTime<Utc>,
}

impl Match {
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    pub fn has_player(&self, id: &PrincipalId) -> bool {
        self.players.contains(id)
    }
}

/// Parameters for creating a match. The creator is auto-enrolled as the
/// first player; `max_players` comes from `sport.max_players()`.
#[derive(Clone, Debug)]
pub struct CreateMatchParams {
    pub sport: Sport,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub created_by: PrincipalId,
    pub level: MatchLevel,
}
