//! Board mutation outcomes
//!
//! These types communicate what happened when board state was modified,
//! allowing callers to log or re-render appropriately.

use serde::{Deserialize, Serialize};

use crate::Cycle;

/// Outcome of toggling one task instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// Simple task marked done
    Checked,
    /// Simple task marked not done
    Unchecked,
    /// Count-based task advanced but is not yet complete
    Progressed { count: u32, max_count: u32 },
    /// Count-based task reached its required count
    Completed { max_count: u32 },
    /// Complete count-based task wrapped back to zero
    Restarted { max_count: u32 },
}

impl ToggleOutcome {
    /// Whether the task is done after this toggle.
    pub fn is_done(&self) -> bool {
        matches!(self, ToggleOutcome::Checked | ToggleOutcome::Completed { .. })
    }
}

/// Outcome of resetting one cycle across the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetOutcome {
    pub cycle: Cycle,
    /// Characters whose lists were rebuilt
    pub characters: usize,
    /// Tasks in each rebuilt list
    pub tasks_per_character: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_outcomes() {
        assert!(ToggleOutcome::Checked.is_done());
        assert!(ToggleOutcome::Completed { max_count: 2 }.is_done());
        assert!(!ToggleOutcome::Unchecked.is_done());
        assert!(!ToggleOutcome::Progressed {
            count: 1,
            max_count: 2
        }
        .is_done());
        assert!(!ToggleOutcome::Restarted { max_count: 2 }.is_done());
    }

    #[test]
    fn toggle_outcome_is_tagged() {
        let json = serde_json::to_value(ToggleOutcome::Progressed {
            count: 1,
            max_count: 3,
        })
        .unwrap();
        assert_eq!(json["kind"], "progressed");
        assert_eq!(json["count"], 1);
    }
}
