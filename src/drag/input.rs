use crate::domain::EntryId;
use crate::pitch::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDevice {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    PressStart,
    Move,
    Release,
}

/// How the host should register its native listener for an event kind.
///
/// Moves must be able to block the platform's scroll/pan gesture, so they
/// are the only non-passive listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOptions {
    pub passive: bool,
}

impl ListenerOptions {
    pub fn for_event(kind: PointerEventKind) -> Self {
        Self {
            passive: kind != PointerEventKind::Move,
        }
    }
}

/// The marker that received a press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressTarget {
    pub entry_id: EntryId,
    /// Client-pixel bounds of the marker
    pub marker: Rect,
}

/// What the host should do with the native event after dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    pub handled: bool,
    pub suppress_default: bool,
}

impl InputOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled(device: PointerDevice, dragging: bool) -> Self {
        Self {
            handled: true,
            suppress_default: device == PointerDevice::Touch && dragging,
        }
    }
}

/// Framework-independent pointer input seam.
///
/// Leaving the tracked area is reported as a release.
pub trait InputHandler {
    fn on_press_start(
        &mut self,
        device: PointerDevice,
        target: PressTarget,
        pointer: Point,
    ) -> InputOutcome;

    fn on_move(&mut self, device: PointerDevice, pointer: Point) -> InputOutcome;

    fn on_release(&mut self, device: PointerDevice) -> InputOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_moves_are_non_passive() {
        assert!(!ListenerOptions::for_event(PointerEventKind::Move).passive);
        assert!(ListenerOptions::for_event(PointerEventKind::PressStart).passive);
        assert!(ListenerOptions::for_event(PointerEventKind::Release).passive);
    }

    #[test]
    fn test_touch_drags_suppress_default() {
        assert!(InputOutcome::handled(PointerDevice::Touch, true).suppress_default);
        assert!(!InputOutcome::handled(PointerDevice::Mouse, true).suppress_default);
        assert!(!InputOutcome::handled(PointerDevice::Touch, false).suppress_default);
    }
}
