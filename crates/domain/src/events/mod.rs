//! Domain events
//!
//! Return types from board mutations, communicating what happened when state
//! was modified. The engine turns them into log lines and responses.

pub mod task_events;

pub use task_events::*;
