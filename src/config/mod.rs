pub mod formations;
pub mod names;
pub mod settings;

pub use formations::{FormationTemplate, Slot, find_formation, formations_for, get_formations};
pub use names::NamePool;
pub use settings::AppConfig;
