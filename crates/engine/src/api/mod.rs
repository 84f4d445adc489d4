//! Renderer boundary: request dispatch and snapshot mapping.

pub mod handler;
pub mod snapshot;

pub use handler::{handle_line, handle_request};
