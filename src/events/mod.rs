//! Host event contract.
//!
//! The host emits [`Event`]s through an [`EventManager`]; plugins subscribe
//! an [`EventHandler`] for the kinds they care about.

mod manager;
mod types;

pub use manager::{EventHandler, EventManager};
pub use types::{Event, EventType};
