pub mod controller;
pub mod input;
pub mod scheduler;
pub mod throttle;

pub use controller::{DragController, DragState, FrameOutcome, PressRefusal};
pub use input::{
    InputHandler, InputOutcome, ListenerOptions, PointerDevice, PointerEventKind, PressTarget,
};
pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler};
pub use throttle::FrameThrottle;
