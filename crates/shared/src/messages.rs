//! Request/response messages between a renderer and the engine

use serde::{Deserialize, Serialize};

use homework_domain::{Character, CharacterStatus, Cycle, TaskId};

use crate::responses::ErrorCode;
use crate::snapshot::{BoardSnapshot, TaskData};

// =============================================================================
// Client Requests (Renderer → Engine)
// =============================================================================

/// Calls a renderer makes into the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientRequest {
    /// Read the full board for rendering
    GetBoard,
    /// A click on one task card
    ToggleTask {
        character: Character,
        cycle: Cycle,
        task_id: TaskId,
    },
    /// Manual reset button for one cycle
    ResetCycle { cycle: Cycle },
}

// =============================================================================
// Server Responses (Engine → Renderer)
// =============================================================================

/// Answers to [`ClientRequest`]s
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerResponse {
    /// Full board state
    Board { snapshot: BoardSnapshot },
    /// The toggled task after the click, with the character's new status
    TaskToggled {
        character: Character,
        cycle: Cycle,
        task: TaskData,
        status: CharacterStatus,
    },
    /// A cycle was reset for every character
    CycleReset { cycle: Cycle, characters: u32 },
    /// The request failed; the board is unchanged
    Error { code: ErrorCode, message: String },
}

impl ServerResponse {
    /// Create an error response
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ServerResponse::Error {
            code,
            message: message.into(),
        }
    }

    /// Check if this is an error response
    pub fn is_error(&self) -> bool {
        matches!(self, ServerResponse::Error { .. })
    }
}
