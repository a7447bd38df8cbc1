//! Agent metadata discovery

pub mod loader;

pub use loader::{Agent, discover_agents};
