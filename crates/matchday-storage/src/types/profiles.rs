//! Profile types.

use serde::{Deserialize, Serialize};

use super::{PrincipalId, SkillLevel, Sport};

/// An authenticated identity, as issued by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub email: String,
}

/// Profile record, keyed by the owning principal's id (one per principal).
///
/// Owner saves are full-document overwrites and always reset
/// `approved_advanced` to false: any edit revokes advanced status pending
/// re-approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: PrincipalId,
    pub name: String,
    pub sport: Sport,
    pub level: SkillLevel,
    /// Durable URL of the uploaded badge image, if any.
    pub image_url: Option<String>,
    pub approved_advanced: bool,
    pub email: String,
}

/// Equality filters for the user directory listing. `None` means no filter.
#[derive(Clone, Debug, Default)]
pub struct ProfileFilter {
    pub sport: Option<Sport>,
    pub level: Option<SkillLevel>,
}

impl ProfileFilter {
    pub fn matches(&self, profile: &Profile) -> bool {
        self.sport.map_or(true, |s| profile.sport == s)
            && self.level.map_or(true, |l| profile.level == l)
    }
}
