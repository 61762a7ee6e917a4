use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::events::{EditorEvent, EventSink, Notice};
use crate::config::settings::EditorSettings;
use crate::config::{FormationTemplate, NamePool, find_formation};
use crate::domain::{EntryId, PositionCode, RosterEntry, Ruleset, SquadRecord};
use crate::drag::{
    DragController, FrameHandle, FrameQueue, FrameScheduler, InputHandler, InputOutcome,
    PointerDevice, PressTarget,
};
use crate::pitch::{Point, Rect};
use crate::roster::{Roster, RosterError, assign_random_teams};

/// One editing session: the roster, its ruleset and formation, and the drag
/// engine working on them.
pub struct EditorSession<S: FrameScheduler, E: EventSink> {
    settings: EditorSettings,
    ruleset: Ruleset,
    formation: &'static FormationTemplate,
    roster: Roster,
    drag: DragController<S>,
    pitch: Rect,
    pool: NamePool,
    rng: StdRng,
    loaded: Option<SquadRecord>,
    teams: Vec<String>,
    sink: E,
}

impl<S: FrameScheduler, E: EventSink> EditorSession<S, E> {
    pub fn new(settings: EditorSettings, scheduler: S, sink: E) -> Self {
        Self::build(settings, scheduler, sink, StdRng::from_entropy())
    }

    /// Deterministic names and team draws
    pub fn with_seed(settings: EditorSettings, scheduler: S, sink: E, seed: u64) -> Self {
        Self::build(settings, scheduler, sink, StdRng::seed_from_u64(seed))
    }

    fn build(settings: EditorSettings, scheduler: S, sink: E, mut rng: StdRng) -> Self {
        let ruleset = Ruleset::default();
        let formation = ruleset.default_formation();
        let pool = NamePool::default();
        let roster = Roster::from_template(formation, &pool, &mut rng);
        let drag = DragController::new(scheduler, settings.frame_interval);

        let mut session = Self {
            settings,
            ruleset,
            formation,
            roster,
            drag,
            pitch: Rect::new(0.0, 0.0, 100.0, 100.0),
            pool,
            rng,
            loaded: None,
            teams: Vec::new(),
            sink,
        };
        session.publish();
        session
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    pub fn formation(&self) -> &'static FormationTemplate {
        self.formation
    }

    pub fn entries(&self) -> &[RosterEntry] {
        self.roster.entries()
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn loaded(&self) -> Option<&SquadRecord> {
        self.loaded.as_ref()
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn drag(&self) -> &DragController<S> {
        &self.drag
    }

    /// Client-pixel bounds of the pitch, used to turn pointer positions
    /// into percentages.
    pub fn set_pitch(&mut self, pitch: Rect) {
        self.pitch = pitch;
    }

    pub fn notify(&mut self, notice: Notice) {
        self.sink.emit(EditorEvent::Notice(notice));
    }

    fn publish(&mut self) {
        self.sink
            .emit(EditorEvent::RosterChanged(self.roster.snapshot()));
    }

    /// Publish on success, raise a notice on failure.
    fn report<T>(&mut self, result: Result<T, RosterError>) -> Result<T, RosterError> {
        match &result {
            Ok(_) => self.publish(),
            Err(e) => self.notify(Notice::error(e.to_string())),
        }
        result
    }

    fn reset_to(&mut self, formation: &'static FormationTemplate) {
        self.drag.release();
        self.ruleset = formation.ruleset;
        self.formation = formation;
        self.roster = Roster::from_template(formation, &self.pool, &mut self.rng);
        self.teams.clear();
        info!("Roster reset to {} ({})", formation.name, formation.ruleset);
        self.publish();
    }

    /// Start over with the ruleset's default formation.
    pub fn switch_ruleset(&mut self, ruleset: Ruleset) {
        self.reset_to(ruleset.default_formation());
    }

    /// Start over with another formation; a formation of the other ruleset
    /// switches ruleset too.
    pub fn change_formation(&mut self, formation: &'static FormationTemplate) {
        self.reset_to(formation);
    }

    pub fn change_formation_by_name(&mut self, name: &str) -> Result<()> {
        let formation =
            find_formation(name).with_context(|| format!("Unknown formation: {}", name))?;
        self.change_formation(formation);
        Ok(())
    }

    pub fn rename(&mut self, id: EntryId, name: &str) -> Result<(), RosterError> {
        let result = self.roster.rename(id, name);
        self.report(result)
    }

    pub fn reassign(&mut self, id: EntryId, position: PositionCode) -> Result<(), RosterError> {
        let result = self.roster.reassign(id, position, self.ruleset);
        self.report(result)
    }

    pub fn delete(&mut self, id: EntryId) -> Result<RosterEntry, RosterError> {
        if self.drag.dragged_entry() == Some(id) {
            self.drag.release();
        }
        let result = self.roster.delete(id);
        self.report(result)
    }

    pub fn add_bench_player(&mut self) -> EntryId {
        let id = self
            .roster
            .add_bench_player(self.ruleset, &self.pool, &mut self.rng);
        self.publish();
        id
    }

    pub fn toggle_bench(&mut self, id: EntryId) -> Result<bool, RosterError> {
        if self.drag.dragged_entry() == Some(id) {
            self.drag.release();
        }
        let result = self.roster.toggle_bench(id, self.ruleset);
        self.report(result)
    }

    /// Replace the lineup with `teams` random teams of `per_team` players.
    pub fn randomize_teams(
        &mut self,
        teams: usize,
        per_team: usize,
    ) -> Result<Vec<String>, RosterError> {
        self.drag.release();
        let result = assign_random_teams(
            &mut self.roster,
            self.formation,
            teams,
            per_team,
            &self.pool,
            &mut self.rng,
        );
        if let Ok(names) = &result {
            self.teams = names.clone();
            self.notify(Notice::success(format!("Created {} random teams", names.len())));
        }
        self.report(result)
    }

    /// Replace the session with a stored squad.
    ///
    /// The formation decides the ruleset; a record whose players hold codes
    /// outside that ruleset is refused and the session is left untouched.
    pub fn load_record(&mut self, record: &SquadRecord) -> Result<()> {
        let formation = find_formation(&record.formation)
            .with_context(|| format!("Unknown formation: {}", record.formation))?;
        let ruleset = formation.ruleset;
        if record.ruleset() != ruleset {
            warn!(
                "Squad {} is tagged {} but uses the {} formation {}",
                record.name,
                record.ruleset(),
                ruleset,
                formation.name
            );
        }

        let invalid: Vec<&str> = record
            .players
            .iter()
            .filter(|p| !ruleset.allows(p.position))
            .map(|p| p.position.as_str())
            .collect();
        if !invalid.is_empty() {
            bail!(
                "Squad {} has positions outside the {} ruleset: {}",
                record.name,
                ruleset,
                invalid.join(", ")
            );
        }

        self.drag.release();
        self.ruleset = ruleset;
        self.formation = formation;
        self.roster = Roster::from_entries(record.players.clone());
        self.teams = team_names(&record.players);
        self.loaded = Some(record.clone());
        info!("Loaded squad {} ({} players)", record.name, record.players.len());
        self.publish();
        Ok(())
    }

    /// Remember `record` as the saved state, e.g. after a successful save.
    pub fn mark_saved(&mut self, record: SquadRecord) {
        self.loaded = Some(record);
    }

    /// Forget the loaded squad so the next save creates a new one.
    pub fn detach(&mut self) {
        self.loaded = None;
    }

    pub fn to_record(&self, name: &str) -> SquadRecord {
        SquadRecord {
            id: None,
            name: name.to_string(),
            formation: self.formation.name.to_string(),
            players: self.roster.snapshot(),
            game_type: Some(self.ruleset),
            created_at: None,
            updated_at: None,
        }
    }

    /// One record per randomized team, named after the team
    pub fn team_records(&self) -> Vec<SquadRecord> {
        self.teams
            .iter()
            .map(|team| SquadRecord {
                id: None,
                name: team.clone(),
                formation: self.formation.name.to_string(),
                players: self
                    .roster
                    .entries()
                    .iter()
                    .filter(|e| e.team_name.as_deref() == Some(team.as_str()))
                    .cloned()
                    .collect(),
                game_type: Some(self.ruleset),
                created_at: None,
                updated_at: None,
            })
            .collect()
    }

    /// Whether the roster or formation differ from the loaded squad.
    /// Always false when nothing was loaded.
    pub fn has_changes(&self) -> bool {
        let Some(loaded) = &self.loaded else {
            return false;
        };
        if loaded.formation != self.formation.name {
            return true;
        }
        let current = self.roster.entries();
        if loaded.players.len() != current.len() {
            return true;
        }

        let tolerance = self.settings.change_tolerance;
        current.iter().any(|entry| {
            match loaded.players.iter().find(|p| p.id == entry.id) {
                Some(saved) => {
                    saved.name != entry.name
                        || saved.position != entry.position
                        || saved.is_bench != entry.is_bench
                        || (saved.x - entry.x).abs() > tolerance
                        || (saved.y - entry.y).abs() > tolerance
                }
                None => true,
            }
        })
    }

    /// Run a frame the host scheduled earlier.
    pub fn run_frame(&mut self, handle: FrameHandle, now: Duration) {
        let Some(outcome) =
            self.drag
                .run_frame(handle, now, self.pitch, &mut self.roster, self.ruleset)
        else {
            return;
        };

        if outcome.raise_notice {
            if let Some(rejection) = &outcome.placement.rejection {
                self.notify(Notice::error(rejection.to_string()));
            }
        }
        self.publish();
    }

    /// Cancel any pending frame and end the drag.
    pub fn close(&mut self) {
        self.drag.dispose();
        debug!("Editor session closed");
    }
}

impl<E: EventSink> EditorSession<FrameQueue, E> {
    /// Run every queued frame at `now`. Returns how many were run.
    pub fn pump_frames(&mut self, now: Duration) -> usize {
        let handles = self.drag.scheduler_mut().drain();
        let count = handles.len();
        for handle in handles {
            self.run_frame(handle, now);
        }
        count
    }
}

impl<S: FrameScheduler, E: EventSink> InputHandler for EditorSession<S, E> {
    fn on_press_start(
        &mut self,
        device: PointerDevice,
        target: PressTarget,
        pointer: Point,
    ) -> InputOutcome {
        let Some(entry) = self.roster.get(target.entry_id) else {
            return InputOutcome::ignored();
        };
        match self.drag.press(entry, target.marker, pointer, self.ruleset) {
            Ok(()) => InputOutcome::handled(device, false),
            Err(refusal) => {
                debug!("Press on entry {} refused: {:?}", target.entry_id, refusal);
                InputOutcome::ignored()
            }
        }
    }

    fn on_move(&mut self, device: PointerDevice, pointer: Point) -> InputOutcome {
        if self.drag.pointer_move(pointer) {
            InputOutcome::handled(device, true)
        } else {
            InputOutcome::ignored()
        }
    }

    fn on_release(&mut self, device: PointerDevice) -> InputOutcome {
        match self.drag.release() {
            Some(_) => InputOutcome::handled(device, false),
            None => InputOutcome::ignored(),
        }
    }
}

fn team_names(players: &[RosterEntry]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in players.iter().filter_map(|p| p.team_name.as_ref()) {
        if !names.contains(name) {
            names.push(name.clone());
        }
    }
    names
}
