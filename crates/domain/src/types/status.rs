//! Aggregate per-character homework status

use serde::{Deserialize, Serialize};

/// Three-way summary of a character's homework.
///
/// Daily completion is checked first: a character whose weekly list is done but
/// whose daily list is not is still `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterStatus {
    /// Daily and weekly lists are both done
    Complete,
    /// Daily list is done, weekly is not
    DailyComplete,
    /// Daily list still has open tasks
    Pending,
}

impl CharacterStatus {
    /// Derive the status from the two per-cycle completion flags.
    pub fn from_completion(daily_done: bool, weekly_done: bool) -> Self {
        match (daily_done, weekly_done) {
            (true, true) => CharacterStatus::Complete,
            (true, false) => CharacterStatus::DailyComplete,
            (false, _) => CharacterStatus::Pending,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterStatus::Complete => "Complete",
            CharacterStatus::DailyComplete => "Daily complete",
            CharacterStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
