use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::position::PositionCode;
use crate::config::find_formation;
use super::ruleset::Ruleset;

pub type EntryId = i64;
pub type SquadId = i64;

/// One player's placement on the pitch or the bench
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: EntryId,
    pub name: String,
    pub position: PositionCode,
    /// Percent of pitch width, 0 = left touchline
    pub x: f64,
    /// Percent of pitch length, 0 = attacking end, 100 = own goal line
    pub y: f64,
    #[serde(default)]
    pub is_bench: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

impl RosterEntry {
    pub fn is_starter(&self) -> bool {
        !self.is_bench
    }

    /// Entries without a team tag form their own partition.
    pub fn same_team(&self, other: &RosterEntry) -> bool {
        self.team_name == other.team_name
    }
}

/// A named, persisted squad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SquadId>,
    pub name: String,
    pub formation: String,
    pub players: Vec<RosterEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_type: Option<Ruleset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SquadRecord {
    pub fn starters(&self) -> impl Iterator<Item = &RosterEntry> {
        self.players.iter().filter(|p| p.is_starter())
    }

    /// Ruleset recorded with the squad. Records saved before the game type
    /// was stored take it from their formation, and failing that from the
    /// starter count.
    pub fn ruleset(&self) -> Ruleset {
        if let Some(game_type) = self.game_type {
            return game_type;
        }
        if let Some(formation) = find_formation(&self.formation) {
            return formation.ruleset;
        }
        if self.starters().count() <= Ruleset::Reduced.max_starters() {
            Ruleset::Reduced
        } else {
            Ruleset::Full
        }
    }

    pub fn apply(&mut self, patch: SquadPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(formation) = patch.formation {
            self.formation = formation;
        }
        if let Some(players) = patch.players {
            self.players = players;
        }
        if let Some(game_type) = patch.game_type {
            self.game_type = Some(game_type);
        }
    }
}

/// Partial update of a squad record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<RosterEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_type: Option<Ruleset>,
}

impl From<SquadRecord> for SquadPatch {
    fn from(record: SquadRecord) -> Self {
        Self {
            name: Some(record.name),
            formation: Some(record.formation),
            players: Some(record.players),
            game_type: record.game_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: EntryId, is_bench: bool) -> RosterEntry {
        RosterEntry {
            id,
            name: format!("Player {}", id),
            position: PositionCode::CM,
            x: 50.0,
            y: 50.0,
            is_bench,
            team_name: None,
        }
    }

    #[test]
    fn test_entry_uses_camel_case_fields() {
        let json = serde_json::to_value(entry(7, true)).unwrap();
        assert_eq!(json["isBench"], true);
        assert_eq!(json["position"], "CM");
        assert!(json.get("teamName").is_none());
    }

    #[test]
    fn test_missing_bench_flag_defaults_to_starter() {
        let json = r#"{"id":1,"name":"A","position":"ST","x":50,"y":12}"#;
        let parsed: RosterEntry = serde_json::from_str(json).unwrap();
        assert!(parsed.is_starter());
    }

    #[test]
    fn test_ruleset_inferred_from_formation_before_starter_count() {
        let mut record = SquadRecord {
            id: None,
            name: "old".to_string(),
            formation: "4-3-3".to_string(),
            players: (1..=7).map(|id| entry(id, false)).collect(),
            game_type: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(record.ruleset(), Ruleset::Full);

        record.formation = "7v7 3-2-1".to_string();
        assert_eq!(record.ruleset(), Ruleset::Reduced);
    }

    #[test]
    fn test_ruleset_inferred_from_starter_count() {
        let mut record = SquadRecord {
            id: None,
            name: "old".to_string(),
            formation: "custom".to_string(),
            players: (1..=7).map(|id| entry(id, false)).collect(),
            game_type: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(record.ruleset(), Ruleset::Reduced);

        record.players.extend((8..=11).map(|id| entry(id, false)));
        assert_eq!(record.ruleset(), Ruleset::Full);

        record.game_type = Some(Ruleset::Reduced);
        assert_eq!(record.ruleset(), Ruleset::Reduced);
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut record = SquadRecord {
            id: Some(3),
            name: "before".to_string(),
            formation: "4-4-2".to_string(),
            players: vec![entry(1, false)],
            game_type: Some(Ruleset::Full),
            created_at: None,
            updated_at: None,
        };
        record.apply(SquadPatch {
            name: Some("after".to_string()),
            ..SquadPatch::default()
        });

        assert_eq!(record.name, "after");
        assert_eq!(record.formation, "4-4-2");
        assert_eq!(record.players.len(), 1);
        assert_eq!(record.id, Some(3));
    }
}
