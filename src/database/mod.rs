pub mod connection;
pub mod setup;
pub mod squads;

pub use connection::{DbConn, DbPool, create_memory_pool, create_pool, get_connection};
