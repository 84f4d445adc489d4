//! Value objects - validated, immutable configuration values

pub mod reset_schedule;

pub use reset_schedule::ResetSchedule;
