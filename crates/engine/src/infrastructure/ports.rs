//! Port traits for the engine's external dependencies.

use chrono::{DateTime, Utc};

/// Source of the current instant, injected so scheduled resets are testable.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
