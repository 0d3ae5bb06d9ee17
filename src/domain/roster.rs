use chrono::{DateTime, Utc};

use crate::config::settings::WarSettings;

use super::errors::RosterError;
use super::models::{ShadowWar, Snapshot};

/// Authoritative in-memory war tree for the active editing session.
///
/// The tier and match layout is a structural constant; `load` rejects
/// snapshots that do not match it and keeps the prior state.
pub struct RosterStore {
    war: ShadowWar,
    expected_tiers: usize,
    expected_matches: usize,
}

impl RosterStore {
    pub fn new(settings: &WarSettings) -> Self {
        Self {
            war: ShadowWar::empty(settings),
            expected_tiers: settings.tiers.len(),
            expected_matches: settings.matches_per_tier,
        }
    }

    /// Replace the whole tree with the snapshot's data
    pub fn load(&mut self, snapshot: &Snapshot) -> Result<(), RosterError> {
        self.validate_shape(&snapshot.war)?;
        self.war = snapshot.war.clone();
        Ok(())
    }

    pub fn current_state(&self) -> &ShadowWar {
        &self.war
    }

    /// Set or clear the scheduled start; always succeeds
    pub fn set_war_time(&mut self, war_time: Option<DateTime<Utc>>) {
        self.war.war_time = war_time;
    }

    fn validate_shape(&self, war: &ShadowWar) -> Result<(), RosterError> {
        if war.war_types.len() != self.expected_tiers {
            return Err(RosterError::MalformedSnapshot(format!(
                "expected {} war types, found {}",
                self.expected_tiers,
                war.war_types.len()
            )));
        }

        for tier in &war.war_types {
            if tier.matches.len() != self.expected_matches {
                return Err(RosterError::MalformedSnapshot(format!(
                    "war type '{}' has {} matches, expected {}",
                    tier.name,
                    tier.matches.len(),
                    self.expected_matches
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{MatchRef, Player};

    fn snapshot_of(war: ShadowWar) -> Snapshot {
        Snapshot {
            id: 1,
            created_at: Utc::now(),
            war,
        }
    }

    #[test]
    fn load_replaces_tree() {
        let settings = WarSettings::default();
        let mut store = RosterStore::new(&settings);

        let mut war = ShadowWar::empty(&settings);
        war.match_at_mut(MatchRef::new(0, 0))
            .unwrap()
            .players
            .push(Player::new("Corol", "Blood Knight"));

        store.load(&snapshot_of(war)).unwrap();
        assert!(store.current_state().contains_player("Corol"));
    }

    #[test]
    fn load_rejects_missing_tier_and_keeps_prior_state() {
        let settings = WarSettings::default();
        let mut store = RosterStore::new(&settings);

        let mut good = ShadowWar::empty(&settings);
        good.match_at_mut(MatchRef::new(1, 1))
            .unwrap()
            .players
            .push(Player::new("Dredna", "Blood Knight"));
        store.load(&snapshot_of(good)).unwrap();

        let mut truncated = ShadowWar::empty(&settings);
        truncated.war_types.pop();
        let result = store.load(&snapshot_of(truncated));

        assert!(matches!(result, Err(RosterError::MalformedSnapshot(_))));
        assert!(store.current_state().contains_player("Dredna"));
    }

    #[test]
    fn load_rejects_wrong_match_count() {
        let settings = WarSettings::default();
        let mut store = RosterStore::new(&settings);

        let mut war = ShadowWar::empty(&settings);
        war.war_types[2].matches.pop();

        let result = store.load(&snapshot_of(war));
        assert!(matches!(result, Err(RosterError::MalformedSnapshot(_))));
    }

    #[test]
    fn set_war_time_sets_and_clears() {
        let settings = WarSettings::default();
        let mut store = RosterStore::new(&settings);

        let when = Utc::now();
        store.set_war_time(Some(when));
        assert_eq!(store.current_state().war_time, Some(when));

        store.set_war_time(None);
        assert!(store.current_state().war_time.is_none());
    }
}
