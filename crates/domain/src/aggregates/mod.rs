//! Aggregate roots - domain objects that own their related data
//!
//! The board owns every task instance:
//! - Keys are closed enums, so invalid slots fail at the boundary
//! - Instances are only reachable mutably through the board
//! - Mutations return domain events

pub mod task_board;

pub use task_board::{CharacterSheet, CycleProgress, TaskBoard};
