//! Homework Protocol - Shared types between the engine and renderers
//!
//! This crate contains the types a presentation layer exchanges with the engine:
//! - Board snapshot DTOs for rendering
//! - Request/response messages for clicks and reset buttons
//! - Error codes
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Closed keys** - `Character` and `Cycle` come from the domain, so a
//!    request naming an unknown slot fails to deserialize

pub mod messages;
pub mod responses;
pub mod snapshot;

pub use messages::{ClientRequest, ServerResponse};
pub use responses::ErrorCode;
pub use snapshot::{BoardSnapshot, CharacterBoard, CycleBoard, TaskData};
