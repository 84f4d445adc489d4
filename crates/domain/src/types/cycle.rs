//! Recurrence cycles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A recurrence class. Each cycle has its own template list and reset trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cycle {
    Daily,
    Weekly,
}

impl Cycle {
    /// Returns all cycles in order.
    pub fn all() -> [Cycle; 2] {
        [Cycle::Daily, Cycle::Weekly]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Cycle::Daily => "daily",
            Cycle::Weekly => "weekly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Cycle::Daily => "일일",
            Cycle::Weekly => "주간",
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Cycle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "daily" => Ok(Cycle::Daily),
            "weekly" => Ok(Cycle::Weekly),
            other => Err(DomainError::parse(format!("Unknown cycle: {}", other))),
        }
    }
}
