//! Domain board to renderer DTO mapping.

use homework_domain::{
    Character, CharacterSheet, Cycle, DomainError, TaskBoard, TaskId, TaskInstance, TaskTemplate,
};
use homework_shared::{BoardSnapshot, CharacterBoard, CycleBoard, TaskData};

/// Build the full render snapshot of `board`.
pub fn board_snapshot(board: &TaskBoard) -> BoardSnapshot {
    let characters = board
        .sheets()
        .map(|(character, sheet)| character_board(board, character, sheet))
        .collect();
    BoardSnapshot { characters }
}

/// The current view of one task.
pub fn task_view(
    board: &TaskBoard,
    character: Character,
    cycle: Cycle,
    task_id: TaskId,
) -> Result<TaskData, DomainError> {
    let instance = board.task(character, cycle, task_id)?;
    let template = board
        .catalog()
        .template(cycle, task_id)
        .ok_or_else(|| DomainError::not_found("TaskTemplate", task_id.to_string()))?;
    Ok(task_data(template, instance))
}

fn character_board(board: &TaskBoard, character: Character, sheet: &CharacterSheet) -> CharacterBoard {
    CharacterBoard {
        character,
        label: character.label().to_string(),
        status: sheet.status(),
        daily: cycle_board(board, sheet, Cycle::Daily),
        weekly: cycle_board(board, sheet, Cycle::Weekly),
    }
}

fn cycle_board(board: &TaskBoard, sheet: &CharacterSheet, cycle: Cycle) -> CycleBoard {
    let progress = sheet.progress(cycle);
    // Instances mirror the templates one-to-one and in order
    let tasks = board
        .catalog()
        .templates(cycle)
        .iter()
        .zip(sheet.tasks(cycle))
        .map(|(template, instance)| task_data(template, instance))
        .collect();

    CycleBoard {
        completed: saturating_u32(progress.completed),
        total: saturating_u32(progress.total),
        tasks,
    }
}

fn task_data(template: &TaskTemplate, instance: &TaskInstance) -> TaskData {
    TaskData {
        id: instance.task_id().value(),
        name: template.name().to_string(),
        done: instance.is_done(),
        count: instance.count(),
        max_count: instance.max_count().map(|m| m.get()),
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
