//! Pure visibility and eligibility rules.
//!
//! Stateless given their inputs; the service core feeds them store data and
//! hands the filtered/annotated views back to the presentation layer.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use matchday_storage::{Match, MatchLevel, PrincipalId, Profile, Sport};

/// A match is visible (and joinable) when it is still in the future and
/// either open to all or the viewer holds advanced approval.
pub fn is_visible(m: &Match, approved_advanced: bool, now: DateTime<Utc>) -> bool {
    m.starts_at > now && (m.level != MatchLevel::Advanced || approved_advanced)
}

/// Filter to the matches the viewer may see, preserving input order.
pub fn filter_visible<'a>(
    matches: &'a [Match],
    approved_advanced: bool,
    now: DateTime<Utc>,
) -> Vec<&'a Match> {
    matches
        .iter()
        .filter(|m| is_visible(m, approved_advanced, now))
        .collect()
}

/// Optional sport filter for the match list. `None` keeps everything.
pub fn filter_by_sport<'a>(matches: &[&'a Match], sport: Option<Sport>) -> Vec<&'a Match> {
    match sport {
        None => matches.to_vec(),
        Some(s) => matches.iter().filter(|m| m.sport == s).copied().collect(),
    }
}

/// Display names of a match's players in join order. Ids whose profile is
/// missing are silently skipped; a deleted account must not break the view.
pub fn resolve_player_names(m: &Match, lookup: &HashMap<PrincipalId, Profile>) -> Vec<String> {
    m.players
        .iter()
        .filter_map(|id| lookup.get(id).map(|p| p.name.clone()))
        .collect()
}

/// Only approved-advanced principals may create advanced-only matches.
pub fn can_create_advanced(profile: &Profile) -> bool {
    profile.approved_advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use matchday_storage::{MatchId, SkillLevel};
    use uuid::Uuid;

    fn match_at(starts_at: DateTime<Utc>, level: MatchLevel, sport: Sport) -> Match {
        Match {
            id: MatchId(Uuid::new_v4()),
            sport,
            location: "City Park".to_string(),
            starts_at,
            created_by: PrincipalId(Uuid::new_v4()),
            players: vec![],
            max_players: sport.max_players(),
            level,
            created_at: Utc::now(),
        }
    }

    fn profile(name: &str, approved: bool) -> Profile {
        Profile {
            id: PrincipalId(Uuid::new_v4()),
            name: name.to_string(),
            sport: Sport::Tennis,
            level: SkillLevel::Advanced,
            image_url: None,
            approved_advanced: approved,
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn listing_scenario_for_unapproved_viewer() {
        // now = 2024-01-01T00:00Z over a past match, a future open match,
        // and a future advanced match.
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let past = match_at(
            Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap(),
            MatchLevel::All,
            Sport::Tennis,
        );
        let future_open = match_at(
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            MatchLevel::All,
            Sport::Tennis,
        );
        let future_advanced = match_at(
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            MatchLevel::Advanced,
            Sport::Tennis,
        );
        let matches = vec![past, future_open.clone(), future_advanced];

        let visible = filter_visible(&matches, false, now);
        assert_eq!(
            visible.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![future_open.id]
        );
    }

    #[test]
    fn approved_viewer_sees_advanced_matches() {
        let now = Utc::now();
        let advanced = match_at(
            now + chrono::Duration::hours(2),
            MatchLevel::Advanced,
            Sport::Basketball,
        );
        let matches = vec![advanced.clone()];

        assert!(filter_visible(&matches, false, now).is_empty());
        assert_eq!(filter_visible(&matches, true, now).len(), 1);
    }

    #[test]
    fn match_starting_exactly_now_is_not_upcoming() {
        let now = Utc::now();
        let m = match_at(now, MatchLevel::All, Sport::Tennis);
        assert!(!is_visible(&m, true, now));
    }

    #[test]
    fn sport_filter() {
        let now = Utc::now();
        let tennis = match_at(now + chrono::Duration::hours(1), MatchLevel::All, Sport::Tennis);
        let football = match_at(
            now + chrono::Duration::hours(1),
            MatchLevel::All,
            Sport::Football,
        );
        let matches = vec![tennis.clone(), football.clone()];
        let all: Vec<&Match> = matches.iter().collect();

        assert_eq!(filter_by_sport(&all, None).len(), 2);
        let only_tennis = filter_by_sport(&all, Some(Sport::Tennis));
        assert_eq!(only_tennis.len(), 1);
        assert_eq!(only_tennis[0].id, tennis.id);
    }

    #[test]
    fn player_names_preserve_join_order_and_skip_missing() {
        let alice = profile("Alice", false);
        let bob = profile("Bob", false);
        let ghost = PrincipalId(Uuid::new_v4());

        let mut m = match_at(Utc::now(), MatchLevel::All, Sport::Football);
        m.players = vec![bob.id, ghost, alice.id];

        let lookup: HashMap<PrincipalId, Profile> =
            [(alice.id, alice), (bob.id, bob)].into_iter().collect();

        assert_eq!(resolve_player_names(&m, &lookup), vec!["Bob", "Alice"]);
    }

    #[test]
    fn advanced_creation_requires_approval() {
        assert!(!can_create_advanced(&profile("Alice", false)));
        assert!(can_create_advanced(&profile("Bob", true)));
    }
}
