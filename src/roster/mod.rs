pub mod invariants;
pub mod store;
pub mod teams;

pub use invariants::{PlacementCheck, Rejection, check_bench_toggle, check_placement};
pub use store::{Placement, Roster, RosterError};
pub use teams::assign_random_teams;
