//! Vocabulary types shared with the renderer DTOs
//!
//! These closed enums are the keys of the board. The shared crate reuses them
//! directly instead of mirroring them as strings.

pub mod character;
pub mod cycle;
pub mod status;

pub use character::{Character, Roster};
pub use cycle::Cycle;
pub use status::CharacterStatus;
