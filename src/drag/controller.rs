use std::time::Duration;

use log::{debug, trace, warn};

use super::scheduler::{FrameHandle, FrameScheduler};
use super::throttle::FrameThrottle;
use crate::domain::{EntryId, RosterEntry, Ruleset};
use crate::pitch::{Point, Rect};
use crate::roster::{Placement, Roster, RosterError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// `offset` is the press point minus the marker centre, in client pixels.
    Dragging { entry_id: EntryId, offset: Point },
}

/// Why a press did not start a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressRefusal {
    GoalkeeperLocked,
    OnBench,
}

/// One applied drag tick
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    pub placement: Placement,
    /// True on the first rejected tick of a streak
    pub raise_notice: bool,
}

/// Press/move/release state machine for dragging roster markers
#[derive(Debug)]
pub struct DragController<S: FrameScheduler> {
    state: DragState,
    scheduler: S,
    throttle: FrameThrottle,
    pending: Option<FrameHandle>,
    latest: Option<Point>,
    rejecting: bool,
}

impl<S: FrameScheduler> DragController<S> {
    pub fn new(scheduler: S, frame_interval: Duration) -> Self {
        Self {
            state: DragState::Idle,
            scheduler,
            throttle: FrameThrottle::new(frame_interval),
            pending: None,
            latest: None,
            rejecting: false,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged_entry(&self) -> Option<EntryId> {
        match self.state {
            DragState::Dragging { entry_id, .. } => Some(entry_id),
            DragState::Idle => None,
        }
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Grab `entry` if the ruleset lets it move.
    pub fn press(
        &mut self,
        entry: &RosterEntry,
        marker: Rect,
        pointer: Point,
        ruleset: Ruleset,
    ) -> Result<(), PressRefusal> {
        if entry.is_bench {
            return Err(PressRefusal::OnBench);
        }
        if entry.position.is_goalkeeper() && ruleset.locks_goalkeeper_drag() {
            debug!("Goalkeeper {} is locked in place", entry.id);
            return Err(PressRefusal::GoalkeeperLocked);
        }

        self.cancel_pending();
        self.state = DragState::Dragging {
            entry_id: entry.id,
            offset: pointer.offset_from(marker.center()),
        };
        self.latest = None;
        self.rejecting = false;
        debug!("Started dragging entry {}", entry.id);
        Ok(())
    }

    /// Record the newest pointer sample and make sure one frame is pending.
    /// Returns false when nothing is being dragged.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.latest = Some(pointer);
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
        }
        true
    }

    /// Run a scheduled frame.
    ///
    /// Stale handles, throttled frames and idle controllers yield `None`.
    pub fn run_frame(
        &mut self,
        handle: FrameHandle,
        now: Duration,
        pitch: Rect,
        roster: &mut Roster,
        ruleset: Ruleset,
    ) -> Option<FrameOutcome> {
        if self.pending != Some(handle) {
            trace!("Ignoring stale frame {:?}", handle);
            return None;
        }
        self.pending = None;

        let DragState::Dragging { entry_id, offset } = self.state else {
            return None;
        };
        let pointer = self.latest.take()?;
        if !self.throttle.try_tick(now) {
            trace!("Drag tick throttled");
            return None;
        }

        let target = Point::new(pointer.x - offset.x, pointer.y - offset.y);
        let (x, y) = pitch.to_percent(target);
        let placement = match roster.place(entry_id, x, y, ruleset) {
            Ok(placement) => placement,
            Err(RosterError::UnknownEntry(id)) => {
                warn!("Dragged entry {} disappeared, ending drag", id);
                self.release();
                return None;
            }
            Err(e) => {
                warn!("Drag tick failed: {}", e);
                return None;
            }
        };

        let rejected = placement.rejection.is_some();
        let raise_notice = rejected && !self.rejecting;
        self.rejecting = rejected;

        trace!(
            "Entry {} -> ({:.1}, {:.1}) {}",
            entry_id, placement.x, placement.y, placement.position
        );
        Some(FrameOutcome {
            placement,
            raise_notice,
        })
    }

    /// End the drag, keeping the last applied position.
    pub fn release(&mut self) -> Option<EntryId> {
        let released = self.dragged_entry();
        self.cancel_pending();
        self.state = DragState::Idle;
        self.latest = None;
        self.rejecting = false;
        self.throttle.reset();
        if let Some(id) = released {
            debug!("Released entry {}", id);
        }
        released
    }

    /// Tear down; no frame callback may fire afterwards.
    pub fn dispose(&mut self) {
        self.release();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for DragController<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamePool;
    use crate::domain::PositionCode;
    use crate::drag::scheduler::FrameQueue;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const PITCH: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 1000.0,
        height: 1000.0,
    };

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn setup(ruleset: Ruleset) -> (DragController<FrameQueue>, Roster) {
        let mut rng = StdRng::seed_from_u64(11);
        let roster = Roster::from_template(ruleset.default_formation(), &NamePool::default(), &mut rng);
        (DragController::new(FrameQueue::new(), ms(16)), roster)
    }

    fn entry(roster: &Roster, position: PositionCode) -> RosterEntry {
        roster
            .entries()
            .iter()
            .find(|e| e.position == position)
            .cloned()
            .unwrap()
    }

    /// Marker rect centred on the entry's current spot
    fn marker(entry: &RosterEntry) -> Rect {
        Rect::new(entry.x * 10.0 - 20.0, entry.y * 10.0 - 20.0, 40.0, 40.0)
    }

    fn pump(
        controller: &mut DragController<FrameQueue>,
        roster: &mut Roster,
        ruleset: Ruleset,
        now: Duration,
    ) -> Vec<FrameOutcome> {
        let handles = controller.scheduler_mut().drain();
        handles
            .into_iter()
            .filter_map(|h| controller.run_frame(h, now, PITCH, roster, ruleset))
            .collect()
    }

    #[test]
    fn test_goalkeeper_lock_depends_on_ruleset() {
        let (mut controller, roster) = setup(Ruleset::Full);
        let keeper = entry(&roster, PositionCode::GK);
        assert_eq!(
            controller.press(&keeper, marker(&keeper), Point::new(500.0, 900.0), Ruleset::Full),
            Err(PressRefusal::GoalkeeperLocked)
        );
        assert_eq!(controller.state(), DragState::Idle);

        let (mut controller, roster) = setup(Ruleset::Reduced);
        let keeper = entry(&roster, PositionCode::GK);
        assert!(
            controller
                .press(&keeper, marker(&keeper), Point::new(500.0, 900.0), Ruleset::Reduced)
                .is_ok()
        );
        assert_eq!(controller.dragged_entry(), Some(keeper.id));
    }

    #[test]
    fn test_bench_entries_cannot_be_grabbed() {
        let (mut controller, mut roster) = setup(Ruleset::Full);
        let id = roster.add_bench_player(Ruleset::Full, &NamePool::default(), &mut StdRng::seed_from_u64(1));
        let bench = roster.get(id).cloned().unwrap();

        assert_eq!(
            controller.press(&bench, marker(&bench), Point::new(0.0, 0.0), Ruleset::Full),
            Err(PressRefusal::OnBench)
        );
    }

    #[test]
    fn test_offset_keeps_marker_from_jumping() {
        let (mut controller, mut roster) = setup(Ruleset::Full);
        let striker = entry(&roster, PositionCode::ST);
        // grab 10px right of and 5px below the marker centre
        let grab = Point::new(striker.x * 10.0 + 10.0, striker.y * 10.0 + 5.0);
        controller.press(&striker, marker(&striker), grab, Ruleset::Full).unwrap();

        controller.pointer_move(Point::new(grab.x + 100.0, grab.y + 100.0));
        let outcomes = pump(&mut controller, &mut roster, Ruleset::Full, ms(0));

        assert_eq!(outcomes.len(), 1);
        let placement = &outcomes[0].placement;
        assert!((placement.x - (striker.x + 10.0)).abs() < 1e-9);
        assert!((placement.y - (striker.y + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_moves_coalesce_into_one_frame_with_latest_sample() {
        let (mut controller, mut roster) = setup(Ruleset::Full);
        let striker = entry(&roster, PositionCode::ST);
        let centre = marker(&striker).center();
        controller.press(&striker, marker(&striker), centre, Ruleset::Full).unwrap();

        for step in 1..=5 {
            assert!(controller.pointer_move(Point::new(500.0, 100.0 * step as f64)));
        }
        assert_eq!(controller.scheduler().pending(), 1);

        let outcomes = pump(&mut controller, &mut roster, Ruleset::Full, ms(0));
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].placement.y, 50.0);
        assert_eq!(outcomes[0].placement.position, PositionCode::CM);
    }

    #[test]
    fn test_throttled_frames_are_dropped() {
        let (mut controller, mut roster) = setup(Ruleset::Full);
        let striker = entry(&roster, PositionCode::ST);
        let centre = marker(&striker).center();
        controller.press(&striker, marker(&striker), centre, Ruleset::Full).unwrap();

        controller.pointer_move(Point::new(500.0, 500.0));
        assert_eq!(pump(&mut controller, &mut roster, Ruleset::Full, ms(100)).len(), 1);

        controller.pointer_move(Point::new(500.0, 300.0));
        assert!(pump(&mut controller, &mut roster, Ruleset::Full, ms(105)).is_empty());
        assert_eq!(roster.get(striker.id).unwrap().y, 50.0);

        controller.pointer_move(Point::new(500.0, 200.0));
        let outcomes = pump(&mut controller, &mut roster, Ruleset::Full, ms(120));
        assert_eq!(outcomes.len(), 1);
        assert_eq!(roster.get(striker.id).unwrap().y, 20.0);
    }

    #[test]
    fn test_drag_ticks_stay_inside_margin() {
        let (mut controller, mut roster) = setup(Ruleset::Full);
        let striker = entry(&roster, PositionCode::ST);
        let centre = marker(&striker).center();
        controller.press(&striker, marker(&striker), centre, Ruleset::Full).unwrap();

        let samples = [
            (-500.0, -500.0),
            (2500.0, 300.0),
            (400.0, 4000.0),
            (1000.0, 0.0),
            (50.0, 950.0),
            (f64::NAN, 10.0),
        ];
        for (tick, (px, py)) in samples.iter().enumerate() {
            controller.pointer_move(Point::new(*px, *py));
            pump(&mut controller, &mut roster, Ruleset::Full, ms(tick as u64 * 20));

            let dragged = roster.get(striker.id).unwrap();
            assert!((5.0..=95.0).contains(&dragged.x), "x = {}", dragged.x);
            assert!((5.0..=95.0).contains(&dragged.y), "y = {}", dragged.y);
        }
    }

    #[test]
    fn test_rejection_notice_once_per_streak() {
        let (mut controller, mut roster) = setup(Ruleset::Full);
        let striker = entry(&roster, PositionCode::ST);
        let centre = marker(&striker).center();
        controller.press(&striker, marker(&striker), centre, Ruleset::Full).unwrap();

        let mut notices = Vec::new();
        for (tick, py) in [900.0, 920.0, 500.0, 910.0].iter().enumerate() {
            controller.pointer_move(Point::new(500.0, *py));
            let outcomes = pump(&mut controller, &mut roster, Ruleset::Full, ms(tick as u64 * 20));
            notices.push(outcomes[0].raise_notice);
        }

        assert_eq!(notices, vec![true, false, false, true]);
    }

    #[test]
    fn test_release_cancels_pending_frame_and_keeps_position() {
        let (mut controller, mut roster) = setup(Ruleset::Full);
        let striker = entry(&roster, PositionCode::ST);
        let centre = marker(&striker).center();
        controller.press(&striker, marker(&striker), centre, Ruleset::Full).unwrap();

        controller.pointer_move(Point::new(300.0, 500.0));
        pump(&mut controller, &mut roster, Ruleset::Full, ms(0));
        controller.pointer_move(Point::new(700.0, 500.0));
        assert!(controller.has_pending_frame());

        assert_eq!(controller.release(), Some(striker.id));
        assert_eq!(controller.scheduler().pending(), 0);
        assert!(!controller.pointer_move(Point::new(100.0, 100.0)));

        let kept = roster.get(striker.id).unwrap();
        assert_eq!((kept.x, kept.y), (30.0, 50.0));
    }

    #[test]
    fn test_stale_handle_is_ignored() {
        let (mut controller, mut roster) = setup(Ruleset::Full);
        let striker = entry(&roster, PositionCode::ST);
        let centre = marker(&striker).center();
        controller.press(&striker, marker(&striker), centre, Ruleset::Full).unwrap();

        controller.pointer_move(Point::new(300.0, 500.0));
        let stale = controller.scheduler_mut().drain()[0];
        controller.dispose();

        assert!(
            controller
                .run_frame(stale, ms(0), PITCH, &mut roster, Ruleset::Full)
                .is_none()
        );
        assert_eq!(roster.get(striker.id).unwrap().position, PositionCode::ST);
    }

    #[test]
    fn test_deleted_entry_ends_drag() {
        let (mut controller, mut roster) = setup(Ruleset::Full);
        let striker = entry(&roster, PositionCode::ST);
        let centre = marker(&striker).center();
        controller.press(&striker, marker(&striker), centre, Ruleset::Full).unwrap();

        controller.pointer_move(Point::new(300.0, 500.0));
        roster.delete(striker.id).unwrap();

        assert!(pump(&mut controller, &mut roster, Ruleset::Full, ms(0)).is_empty());
        assert!(!controller.is_dragging());
    }
}
