use log::trace;

/// Identifies one requested frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Host hook for animation-frame style scheduling.
///
/// The host later hands the handle back to the editor when the frame fires.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Headless scheduler: frames wait in a queue until the host drains it
#[derive(Debug, Default)]
pub struct FrameQueue {
    next: u64,
    pending: Vec<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn drain(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending.push(handle);
        trace!("Frame {} requested", self.next);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|pending| *pending != handle);
        trace!("Frame {} cancelled", handle.0);
    }
}
