//! Homework board domain
//!
//! Tracks recurring in-game checklist items per character across the daily and
//! weekly cycles. Everything here is pure and synchronous: the board is an
//! owned value, mutated only through its own methods, and rendering layers read
//! it back through the accessors.
//!
//! ## Structure
//!
//! - `types/` - closed vocabulary: characters, cycles, aggregate status
//! - `entities/` - task templates and per-character task instances
//! - `aggregates/` - the [`TaskBoard`] state store
//! - `value_objects/` - the validated [`ResetSchedule`](value_objects::ResetSchedule)
//! - `reset` - the [`ResetController`] applying manual and scheduled resets

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod reset;
pub mod types;
pub mod value_objects;

pub use aggregates::{CharacterSheet, CycleProgress, TaskBoard};
pub use entities::{TaskInstance, TaskProgress, TaskTemplate, TemplateCatalog};
pub use error::DomainError;
pub use events::{ResetOutcome, ToggleOutcome};
pub use ids::TaskId;
pub use reset::ResetController;
pub use types::{Character, CharacterStatus, Cycle, Roster};
pub use value_objects::ResetSchedule;
