pub mod geometry;
pub mod zones;

pub use geometry::{Point, Rect, clamp_to_pitch};
pub use zones::classify;
