pub mod models;
pub mod position;
pub mod ruleset;

pub use models::*;
pub use position::{PositionCode, PositionGroup, UnknownPosition};
pub use ruleset::Ruleset;
