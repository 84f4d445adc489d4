//! TaskBoard aggregate - the task state store
//!
//! # Rustic DDD Design
//!
//! - **Closed keys**: characters and cycles are enums, so a board can only be
//!   addressed by slots that exist
//! - **Sole writer**: instances are mutated only through [`TaskBoard::toggle`]
//!   and rebuilt only through a cycle reset
//! - **Shared templates**: every board reads the same `Arc<TemplateCatalog>`
//! - **Events**: mutations return what happened instead of nothing

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::events::{ResetOutcome, ToggleOutcome};
use crate::{
    Character, CharacterStatus, Cycle, DomainError, Roster, TaskId, TaskInstance, TemplateCatalog,
};

/// Completed/total counts for one character's cycle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleProgress {
    pub completed: usize,
    pub total: usize,
}

impl CycleProgress {
    /// True when every task is done. An empty list counts as done.
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

/// One character's task instances for both cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheet {
    daily: Vec<TaskInstance>,
    weekly: Vec<TaskInstance>,
}

impl CharacterSheet {
    fn fresh(catalog: &TemplateCatalog) -> Self {
        Self {
            daily: fresh_instances(catalog, Cycle::Daily),
            weekly: fresh_instances(catalog, Cycle::Weekly),
        }
    }

    /// Instances for `cycle`, in template order.
    pub fn tasks(&self, cycle: Cycle) -> &[TaskInstance] {
        match cycle {
            Cycle::Daily => &self.daily,
            Cycle::Weekly => &self.weekly,
        }
    }

    fn tasks_mut(&mut self, cycle: Cycle) -> &mut Vec<TaskInstance> {
        match cycle {
            Cycle::Daily => &mut self.daily,
            Cycle::Weekly => &mut self.weekly,
        }
    }

    pub fn is_fully_done(&self, cycle: Cycle) -> bool {
        self.tasks(cycle).iter().all(TaskInstance::is_done)
    }

    pub fn progress(&self, cycle: Cycle) -> CycleProgress {
        let tasks = self.tasks(cycle);
        CycleProgress {
            completed: tasks.iter().filter(|t| t.is_done()).count(),
            total: tasks.len(),
        }
    }

    pub fn status(&self) -> CharacterStatus {
        CharacterStatus::from_completion(
            self.is_fully_done(Cycle::Daily),
            self.is_fully_done(Cycle::Weekly),
        )
    }
}

/// The full (character x cycle x task) state of the homework board.
///
/// # Invariants
///
/// - Every rostered character has exactly one list per cycle
/// - Each list mirrors its cycle's templates one-to-one, in order
/// - Count-based completion is always derived from the count
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use homework_domain::{Character, Cycle, Roster, TaskBoard, TaskId, TemplateCatalog};
///
/// let mut board = TaskBoard::initialize(Arc::new(TemplateCatalog::default()), &Roster::default());
/// board.toggle(Character::Main, Cycle::Daily, TaskId::new(101)).unwrap();
///
/// let progress = board.progress(Character::Main, Cycle::Daily).unwrap();
/// assert_eq!((progress.completed, progress.total), (1, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    catalog: Arc<TemplateCatalog>,
    sheets: BTreeMap<Character, CharacterSheet>,
}

impl TaskBoard {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Build fresh lists for every rostered character and every cycle.
    pub fn initialize(catalog: Arc<TemplateCatalog>, roster: &Roster) -> Self {
        let sheets = roster
            .characters()
            .iter()
            .map(|&character| (character, CharacterSheet::fresh(&catalog)))
            .collect();
        Self { catalog, sheets }
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    #[inline]
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Rostered characters in slot order.
    pub fn characters(&self) -> impl Iterator<Item = Character> + '_ {
        self.sheets.keys().copied()
    }

    /// Every character's sheet in slot order, for rendering.
    pub fn sheets(&self) -> impl Iterator<Item = (Character, &CharacterSheet)> + '_ {
        self.sheets.iter().map(|(&character, sheet)| (character, sheet))
    }

    pub fn sheet(&self, character: Character) -> Result<&CharacterSheet, DomainError> {
        self.sheets
            .get(&character)
            .ok_or_else(|| DomainError::not_found("Character", character.key()))
    }

    pub fn tasks(&self, character: Character, cycle: Cycle) -> Result<&[TaskInstance], DomainError> {
        Ok(self.sheet(character)?.tasks(cycle))
    }

    /// One instance of a character's cycle list.
    pub fn task(
        &self,
        character: Character,
        cycle: Cycle,
        task_id: TaskId,
    ) -> Result<&TaskInstance, DomainError> {
        self.tasks(character, cycle)?
            .iter()
            .find(|t| t.task_id() == task_id)
            .ok_or_else(|| task_not_found(cycle, task_id))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// True iff every task of `character` in `cycle` is done.
    pub fn is_character_fully_done(
        &self,
        character: Character,
        cycle: Cycle,
    ) -> Result<bool, DomainError> {
        Ok(self.sheet(character)?.is_fully_done(cycle))
    }

    /// Three-way aggregate status, daily checked first.
    pub fn status(&self, character: Character) -> Result<CharacterStatus, DomainError> {
        Ok(self.sheet(character)?.status())
    }

    pub fn progress(&self, character: Character, cycle: Cycle) -> Result<CycleProgress, DomainError> {
        Ok(self.sheet(character)?.progress(cycle))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Apply one click to a single task instance.
    ///
    /// Every other instance on the board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the character is not rostered or the task id is not
    /// part of the cycle. The board is unchanged in that case.
    pub fn toggle(
        &mut self,
        character: Character,
        cycle: Cycle,
        task_id: TaskId,
    ) -> Result<ToggleOutcome, DomainError> {
        let sheet = self
            .sheets
            .get_mut(&character)
            .ok_or_else(|| DomainError::not_found("Character", character.key()))?;

        sheet
            .tasks_mut(cycle)
            .iter_mut()
            .find(|t| t.task_id() == task_id)
            .map(TaskInstance::toggle)
            .ok_or_else(|| task_not_found(cycle, task_id))
    }

    /// Replace every character's `cycle` list with a fresh build.
    ///
    /// The other cycle is not touched.
    pub(crate) fn rebuild_cycle(&mut self, cycle: Cycle) -> ResetOutcome {
        let fresh = fresh_instances(&self.catalog, cycle);
        for sheet in self.sheets.values_mut() {
            *sheet.tasks_mut(cycle) = fresh.clone();
        }
        ResetOutcome {
            cycle,
            characters: self.sheets.len(),
            tasks_per_character: fresh.len(),
        }
    }
}

fn fresh_instances(catalog: &TemplateCatalog, cycle: Cycle) -> Vec<TaskInstance> {
    catalog
        .templates(cycle)
        .iter()
        .map(TaskInstance::fresh)
        .collect()
}

fn task_not_found(cycle: Cycle, task_id: TaskId) -> DomainError {
    DomainError::not_found("Task", format!("{}/{}", cycle, task_id))
}
