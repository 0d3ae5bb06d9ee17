use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::{TierSettings, WarSettings};

/// A clan member assigned to a war match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub class: String,
    #[serde(default)]
    pub is_ready: bool,
}

impl Player {
    pub fn new(name: &str, class: &str) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            is_ready: false,
        }
    }
}

/// A sub-bracket within a war type holding an ordered list of players
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarMatch {
    pub id: String,
    pub name: String,
    pub players: Vec<Player>,
}

/// A scoring tier with a fixed point value and a fixed set of matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarType {
    pub name: String,
    pub points: i32,
    pub matches: Vec<WarMatch>,
}

impl WarType {
    fn empty(tier: &TierSettings, match_count: usize) -> Self {
        let display = title_case(tier.name);
        let slug = tier.name.to_lowercase();
        let matches = (1..=match_count)
            .map(|n| WarMatch {
                id: format!("{}-match-{}", slug, n),
                name: format!("{} Match {}", display, n),
                players: Vec::new(),
            })
            .collect();

        Self {
            name: tier.name.to_string(),
            points: tier.points,
            matches,
        }
    }
}

/// Root aggregate: the full assignment tree for one shadow war
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowWar {
    pub war_time: Option<DateTime<Utc>>,
    pub war_types: Vec<WarType>,
}

impl ShadowWar {
    /// Build the fixed tier/match layout with no players assigned
    pub fn empty(settings: &WarSettings) -> Self {
        let war_types = settings
            .tiers
            .iter()
            .map(|tier| WarType::empty(tier, settings.matches_per_tier))
            .collect();

        Self {
            war_time: None,
            war_types,
        }
    }

    pub fn match_at(&self, target: MatchRef) -> Option<&WarMatch> {
        self.war_types
            .get(target.war_type)
            .and_then(|tier| tier.matches.get(target.match_index))
    }

    pub fn match_at_mut(&mut self, target: MatchRef) -> Option<&mut WarMatch> {
        self.war_types
            .get_mut(target.war_type)
            .and_then(|tier| tier.matches.get_mut(target.match_index))
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.war_types
            .iter()
            .flat_map(|tier| tier.matches.iter())
            .flat_map(|m| m.players.iter())
    }

    pub fn contains_player(&self, name: &str) -> bool {
        self.players().any(|p| p.name == name)
    }
}

/// Position of a match inside the war tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRef {
    pub war_type: usize,
    pub match_index: usize,
}

impl MatchRef {
    pub fn new(war_type: usize, match_index: usize) -> Self {
        Self {
            war_type,
            match_index,
        }
    }
}

/// Immutable timestamped capture of a full ShadowWar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub war: ShadowWar,
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::WarSettings;

    #[test]
    fn empty_war_has_fixed_layout() {
        let war = ShadowWar::empty(&WarSettings::default());

        assert_eq!(war.war_types.len(), 4);
        assert!(war.war_time.is_none());
        assert!(war.war_types.iter().all(|t| t.matches.len() == 3));

        let exalted = &war.war_types[0];
        assert_eq!(exalted.name, "EXALTED");
        assert_eq!(exalted.points, 8);
        assert_eq!(exalted.matches[0].id, "exalted-match-1");
        assert_eq!(exalted.matches[0].name, "Exalted Match 1");
    }

    #[test]
    fn match_ref_resolution() {
        let war = ShadowWar::empty(&WarSettings::default());

        assert!(war.match_at(MatchRef::new(3, 2)).is_some());
        assert!(war.match_at(MatchRef::new(4, 0)).is_none());
        assert!(war.match_at(MatchRef::new(0, 3)).is_none());
    }
}
