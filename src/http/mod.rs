pub mod client;

pub use client::{AuthedClient, ensure_success};
