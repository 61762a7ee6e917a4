use crate::domain::{EntryId, PositionCode, RosterEntry, Ruleset};

/// Why a roster mutation was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("only one goalkeeper is allowed")]
    DuplicateGoalkeeper,
    #[error("the starting lineup is limited to {max} players")]
    StartersFull { max: usize },
    #[error("{position} is not a {ruleset} position")]
    InvalidPosition {
        position: PositionCode,
        ruleset: Ruleset,
    },
}

/// Outcome of checking a candidate position for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementCheck {
    Accepted,
    /// `fallback` is the entry's current position, so a refused drag keeps
    /// the displayed code unchanged.
    Rejected {
        reason: Rejection,
        fallback: PositionCode,
    },
}

impl PlacementCheck {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlacementCheck::Accepted)
    }

    /// The position that should end up on the entry
    pub fn resolve(&self, candidate: PositionCode) -> PositionCode {
        match self {
            PlacementCheck::Accepted => candidate,
            PlacementCheck::Rejected { fallback, .. } => *fallback,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            PlacementCheck::Accepted => None,
            PlacementCheck::Rejected { reason, .. } => Some(reason),
        }
    }
}

/// Can `entry_id` take `candidate` without breaking the roster invariants?
///
/// Goalkeeper exclusivity is checked among non-bench entries of the same
/// team; bench entries never count. Pure: nothing is mutated.
pub fn check_placement(
    candidate: PositionCode,
    entry_id: EntryId,
    roster: &[RosterEntry],
    ruleset: Ruleset,
) -> PlacementCheck {
    let entry = roster.iter().find(|e| e.id == entry_id);
    let fallback = entry
        .map(|e| e.position)
        .unwrap_or_else(|| ruleset.primary_striker());

    if !ruleset.allows(candidate) {
        return PlacementCheck::Rejected {
            reason: Rejection::InvalidPosition {
                position: candidate,
                ruleset,
            },
            fallback,
        };
    }

    if candidate == ruleset.goalkeeper()
        && ruleset.enforces_single_goalkeeper()
        && has_other_goalkeeper(entry_id, entry, roster, ruleset)
    {
        return PlacementCheck::Rejected {
            reason: Rejection::DuplicateGoalkeeper,
            fallback,
        };
    }

    PlacementCheck::Accepted
}

fn has_other_goalkeeper(
    entry_id: EntryId,
    entry: Option<&RosterEntry>,
    roster: &[RosterEntry],
    ruleset: Ruleset,
) -> bool {
    roster.iter().any(|other| {
        other.id != entry_id
            && other.is_starter()
            && other.position == ruleset.goalkeeper()
            && entry.is_none_or(|e| e.same_team(other))
    })
}

/// Can `entry` switch between bench and starting lineup?
///
/// Moving to the bench is always allowed; joining the lineup is refused once
/// the whole roster already fields the ruleset maximum, whatever the teams.
pub fn check_bench_toggle(
    entry: &RosterEntry,
    roster: &[RosterEntry],
    ruleset: Ruleset,
) -> Result<(), Rejection> {
    if entry.is_starter() {
        return Ok(());
    }

    let max = ruleset.max_starters();
    if count_starters(roster) >= max {
        return Err(Rejection::StartersFull { max });
    }
    Ok(())
}

pub fn count_starters(roster: &[RosterEntry]) -> usize {
    roster.iter().filter(|e| e.is_starter()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: EntryId, position: PositionCode, is_bench: bool) -> RosterEntry {
        RosterEntry {
            id,
            name: format!("P{}", id),
            position,
            x: 50.0,
            y: 50.0,
            is_bench,
            team_name: None,
        }
    }

    #[test]
    fn test_second_goalkeeper_is_rejected_with_current_position() {
        let roster = vec![
            entry(1, PositionCode::GK, false),
            entry(2, PositionCode::ST, false),
        ];

        let check = check_placement(PositionCode::GK, 2, &roster, Ruleset::Full);

        assert_eq!(
            check,
            PlacementCheck::Rejected {
                reason: Rejection::DuplicateGoalkeeper,
                fallback: PositionCode::ST,
            }
        );
        assert_eq!(check.resolve(PositionCode::GK), PositionCode::ST);
    }

    #[test]
    fn test_goalkeeper_may_stay_goalkeeper() {
        let roster = vec![entry(1, PositionCode::GK, false)];
        assert!(check_placement(PositionCode::GK, 1, &roster, Ruleset::Full).is_accepted());
    }

    #[test]
    fn test_benched_goalkeeper_does_not_block() {
        let roster = vec![
            entry(1, PositionCode::GK, true),
            entry(2, PositionCode::ST, false),
        ];
        assert!(check_placement(PositionCode::GK, 2, &roster, Ruleset::Full).is_accepted());
    }

    #[test]
    fn test_reduced_ruleset_allows_several_goalkeepers() {
        let roster = vec![
            entry(1, PositionCode::GK, false),
            entry(2, PositionCode::FW, false),
        ];
        assert!(check_placement(PositionCode::GK, 2, &roster, Ruleset::Reduced).is_accepted());
    }

    #[test]
    fn test_goalkeepers_of_other_teams_do_not_block() {
        let mut keeper = entry(1, PositionCode::GK, false);
        keeper.team_name = Some("Team 1".to_string());
        let mut striker = entry(2, PositionCode::ST, false);
        striker.team_name = Some("Team 2".to_string());

        let roster = vec![keeper, striker];
        assert!(check_placement(PositionCode::GK, 2, &roster, Ruleset::Full).is_accepted());
    }

    #[test]
    fn test_position_outside_ruleset_is_rejected() {
        let roster = vec![entry(1, PositionCode::MF, false)];
        let check = check_placement(PositionCode::CDM, 1, &roster, Ruleset::Reduced);

        assert_eq!(
            check.rejection(),
            Some(&Rejection::InvalidPosition {
                position: PositionCode::CDM,
                ruleset: Ruleset::Reduced,
            })
        );
        assert_eq!(check.resolve(PositionCode::CDM), PositionCode::MF);
    }

    #[test]
    fn test_bench_toggle_respects_cap() {
        for ruleset in [Ruleset::Full, Ruleset::Reduced] {
            let max = ruleset.max_starters();
            let mut roster: Vec<RosterEntry> = (1..=max as EntryId)
                .map(|id| entry(id, PositionCode::GK, false))
                .collect();
            roster.push(entry(100, PositionCode::GK, true));

            let bench = roster.last().unwrap().clone();
            assert_eq!(
                check_bench_toggle(&bench, &roster, ruleset),
                Err(Rejection::StartersFull { max })
            );

            // starters can always go to the bench
            assert!(check_bench_toggle(&roster[0], &roster, ruleset).is_ok());

            roster.remove(0);
            assert!(check_bench_toggle(&bench, &roster, ruleset).is_ok());
        }
    }

    #[test]
    fn test_bench_toggle_counts_every_team() {
        let mut roster: Vec<RosterEntry> = (1..=4)
            .map(|id| {
                let mut e = entry(id, PositionCode::MF, false);
                e.team_name = Some(format!("Team {}", 1 + id % 2));
                e
            })
            .collect();
        roster.extend((5..=7).map(|id| entry(id, PositionCode::FW, false)));
        let bench = entry(8, PositionCode::FW, true);
        roster.push(bench.clone());

        assert_eq!(count_starters(&roster), 7);
        assert_eq!(
            check_bench_toggle(&bench, &roster, Ruleset::Reduced),
            Err(Rejection::StartersFull { max: 7 })
        );
    }
}
