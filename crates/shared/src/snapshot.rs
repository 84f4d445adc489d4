//! Board snapshot DTOs
//!
//! The full current state (character -> cycle -> ordered task list) in the
//! shape a renderer draws it. Template names are resolved, completion is
//! spelled out, and count fields only appear on count-based tasks.

use serde::{Deserialize, Serialize};

use homework_domain::{Character, CharacterStatus};

/// Everything a renderer needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub characters: Vec<CharacterBoard>,
}

impl BoardSnapshot {
    /// Find one character's board.
    pub fn character(&self, character: Character) -> Option<&CharacterBoard> {
        self.characters.iter().find(|c| c.character == character)
    }
}

/// One character's lists and aggregate status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBoard {
    pub character: Character,
    pub label: String,
    pub status: CharacterStatus,
    pub daily: CycleBoard,
    pub weekly: CycleBoard,
}

/// One cycle's ordered task list with a progress summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleBoard {
    pub completed: u32,
    pub total: u32,
    pub tasks: Vec<TaskData>,
}

/// A single task as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    pub id: u32,
    pub name: String,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u32>,
}
