use log::info;
use rand::Rng;

use super::store::{Roster, RosterError};
use crate::config::names::placeholder;
use crate::config::{FormationTemplate, NamePool, Slot, formations_for};

/// Most players a randomized team may field
pub const MAX_PLAYERS_PER_TEAM: usize = 7;

pub fn team_name(index: usize) -> String {
    format!("Team {}", index + 1)
}

/// Upper bound on players per team for a given active formation
pub fn max_per_team(active: &FormationTemplate) -> usize {
    MAX_PLAYERS_PER_TEAM.min(active.len())
}

/// Slots used for one randomized team of `per_team` players.
///
/// The active formation is reused when its size matches; otherwise the first
/// same-ruleset formation with that many slots, and failing that the leading
/// slots of the active formation.
pub fn team_slots(active: &FormationTemplate, per_team: usize) -> Vec<Slot> {
    if active.len() == per_team {
        return active.slots.to_vec();
    }
    if let Some(exact) = formations_for(active.ruleset).find(|f| f.len() == per_team) {
        return exact.slots.to_vec();
    }
    active.slots.iter().take(per_team).copied().collect()
}

/// Replace the starting lineup with `teams` randomly named teams of
/// `per_team` players each. Bench entries are kept.
///
/// Returns the team names in order.
pub fn assign_random_teams<R: Rng + ?Sized>(
    roster: &mut Roster,
    active: &FormationTemplate,
    teams: usize,
    per_team: usize,
    pool: &NamePool,
    rng: &mut R,
) -> Result<Vec<String>, RosterError> {
    if teams == 0 {
        return Err(RosterError::NoTeams);
    }
    let max = max_per_team(active);
    if per_team == 0 || per_team > max {
        return Err(RosterError::TeamSize {
            requested: per_team,
            max,
        });
    }

    roster.clear_starters();
    let mut taken = roster.names_in_use();
    let fresh: Vec<String> = pool
        .shuffled(rng)
        .into_iter()
        .filter(|name| !taken.contains(name))
        .collect();
    let mut names = fresh.into_iter();

    let slots = team_slots(active, per_team);
    let mut team_names = Vec::with_capacity(teams);
    for index in 0..teams {
        let team = team_name(index);
        for slot in &slots {
            let name = names.next().unwrap_or_else(|| placeholder(&taken));
            taken.insert(name.clone());
            roster.push(name, slot.position, slot.x, slot.y, false, Some(team.clone()));
        }
        team_names.push(team);
    }

    info!(
        "Assigned {} players to {} random teams",
        teams * per_team,
        teams
    );
    Ok(team_names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::find_formation;
    use crate::domain::{PositionCode, Ruleset};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_team_slots_prefers_exact_formation() {
        let active = find_formation("5v5 1-2-1").unwrap();
        assert_eq!(team_slots(active, 5), active.slots.to_vec());

        let six = team_slots(active, 6);
        assert_eq!(six, find_formation("6v6 2-2-1").unwrap().slots.to_vec());
    }

    #[test]
    fn test_team_slots_synthesized_from_active() {
        let active = Ruleset::Full.default_formation();
        let slots = team_slots(active, 4);
        assert_eq!(slots, active.slots[..4].to_vec());
        assert_eq!(slots[0].position, PositionCode::GK);
    }

    #[test]
    fn test_assign_random_teams() {
        let active = Ruleset::Full.default_formation();
        let pool = NamePool::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut roster = Roster::from_template(active, &pool, &mut rng);
        let bench = roster.add_bench_player(Ruleset::Full, &pool, &mut rng);

        let teams = assign_random_teams(&mut roster, active, 3, 6, &pool, &mut rng).unwrap();

        assert_eq!(teams, vec!["Team 1", "Team 2", "Team 3"]);
        assert!(roster.get(bench).is_some());
        assert_eq!(roster.len(), 3 * 6 + 1);
        for team in &teams {
            let members = roster
                .entries()
                .iter()
                .filter(|e| e.is_starter() && e.team_name.as_deref() == Some(team.as_str()))
                .count();
            assert_eq!(members, 6);
        }
        assert_eq!(roster.names_in_use().len(), roster.len());

        let ids: HashSet<_> = roster.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn test_more_players_than_names() {
        let active = Ruleset::Full.default_formation();
        let pool = NamePool::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut roster = Roster::new();

        assign_random_teams(&mut roster, active, 7, 7, &pool, &mut rng).unwrap();

        assert_eq!(roster.len(), 49);
        assert_eq!(roster.names_in_use().len(), 49);
    }

    #[test]
    fn test_team_size_limits() {
        let active = Ruleset::Reduced.default_formation();
        let pool = NamePool::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut roster = Roster::new();

        assert_eq!(
            assign_random_teams(&mut roster, active, 0, 5, &pool, &mut rng),
            Err(RosterError::NoTeams)
        );
        assert_eq!(
            assign_random_teams(&mut roster, active, 2, 6, &pool, &mut rng),
            Err(RosterError::TeamSize {
                requested: 6,
                max: 5
            })
        );
        assert!(assign_random_teams(&mut roster, active, 2, 0, &pool, &mut rng).is_err());
        assert!(roster.is_empty());
    }
}
