use std::collections::HashSet;

use log::debug;
use rand::Rng;

use super::invariants::{self, PlacementCheck, Rejection};
use crate::config::{FormationTemplate, NamePool};
use crate::domain::{EntryId, PositionCode, RosterEntry, Ruleset};
use crate::pitch::{clamp_to_pitch, classify};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("no roster entry with id {0}")]
    UnknownEntry(EntryId),
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("at least one team is required")]
    NoTeams,
    #[error("teams need between 1 and {max} players, got {requested}")]
    TeamSize { requested: usize, max: usize },
}

/// Result of one drag-driven placement
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub entry_id: EntryId,
    pub x: f64,
    pub y: f64,
    /// Position the entry holds after the placement
    pub position: PositionCode,
    pub rejection: Option<Rejection>,
}

/// In-memory roster collection and its mutation contract
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    next_id: EntryId,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Adopt entries loaded from elsewhere; new ids continue above the
    /// highest one present.
    pub fn from_entries(entries: Vec<RosterEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { entries, next_id }
    }

    /// One fresh entry per template slot
    pub fn from_template<R: Rng + ?Sized>(
        template: &FormationTemplate,
        pool: &NamePool,
        rng: &mut R,
    ) -> Self {
        let mut roster = Self::new();
        for slot in template.slots {
            let name = pool.draw(&roster.names_in_use(), rng);
            roster.push(name, slot.position, slot.x, slot.y, false, None);
        }
        debug!(
            "Instantiated {} entries from formation {}",
            roster.len(),
            template.name
        );
        roster
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn snapshot(&self) -> Vec<RosterEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn starter_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_starter()).count()
    }

    pub fn names_in_use(&self) -> HashSet<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    fn entry_mut(&mut self, id: EntryId) -> Result<&mut RosterEntry, RosterError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RosterError::UnknownEntry(id))
    }

    pub(crate) fn push(
        &mut self,
        name: String,
        position: PositionCode,
        x: f64,
        y: f64,
        is_bench: bool,
        team_name: Option<String>,
    ) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(RosterEntry {
            id,
            name,
            position,
            x,
            y,
            is_bench,
            team_name,
        });
        id
    }

    /// Drop every non-bench entry, keeping the bench and the id counter.
    pub(crate) fn clear_starters(&mut self) {
        self.entries.retain(|e| e.is_bench);
    }

    pub fn rename(&mut self, id: EntryId, name: &str) -> Result<(), RosterError> {
        self.entry_mut(id)?.name = name.to_string();
        Ok(())
    }

    /// Give an entry a new position and move it to that position's default
    /// spot on the pitch.
    pub fn reassign(
        &mut self,
        id: EntryId,
        position: PositionCode,
        ruleset: Ruleset,
    ) -> Result<(), RosterError> {
        if self.get(id).is_none() {
            return Err(RosterError::UnknownEntry(id));
        }
        if let PlacementCheck::Rejected { reason, .. } =
            invariants::check_placement(position, id, &self.entries, ruleset)
        {
            return Err(reason.into());
        }

        let (x, y) = position.default_coordinates();
        let entry = self.entry_mut(id)?;
        entry.position = position;
        entry.x = x;
        entry.y = y;
        Ok(())
    }

    pub fn delete(&mut self, id: EntryId) -> Result<RosterEntry, RosterError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(RosterError::UnknownEntry(id))?;
        Ok(self.entries.remove(index))
    }

    pub fn add_bench_player<R: Rng + ?Sized>(
        &mut self,
        ruleset: Ruleset,
        pool: &NamePool,
        rng: &mut R,
    ) -> EntryId {
        let name = pool.draw(&self.names_in_use(), rng);
        let position = ruleset.primary_striker();
        let (x, y) = position.default_coordinates();
        self.push(name, position, x, y, true, None)
    }

    /// Flip the bench flag. Returns the new `is_bench` value.
    pub fn toggle_bench(&mut self, id: EntryId, ruleset: Ruleset) -> Result<bool, RosterError> {
        let entry = self.get(id).ok_or(RosterError::UnknownEntry(id))?;
        invariants::check_bench_toggle(entry, &self.entries, ruleset)?;

        let entry = self.entry_mut(id)?;
        entry.is_bench = !entry.is_bench;
        if entry.is_starter() {
            let (x, y) = entry.position.default_coordinates();
            entry.x = x;
            entry.y = y;
        }
        Ok(entry.is_bench)
    }

    /// Clamp, classify and check a drag target, then apply it.
    ///
    /// Coordinates always move; a rejected position leaves the entry's code
    /// as it was.
    pub fn place(
        &mut self,
        id: EntryId,
        x: f64,
        y: f64,
        ruleset: Ruleset,
    ) -> Result<Placement, RosterError> {
        let (x, y) = clamp_to_pitch(x, y);
        let candidate = classify(x, y, ruleset);
        let check = invariants::check_placement(candidate, id, &self.entries, ruleset);
        let position = check.resolve(candidate);

        let entry = self.entry_mut(id)?;
        entry.x = x;
        entry.y = y;
        entry.position = position;

        Ok(Placement {
            entry_id: id,
            x,
            y,
            position,
            rejection: check.rejection().cloned(),
        })
    }
}
