//! Application state and composition.
//!
//! [`HomeworkApp`] is the single owner of the board. Every inbound call is a
//! `&mut self` method, so one user action fully applies before the next one is
//! handled.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use homework_domain::{
    Character, CharacterStatus, Cycle, DomainError, ResetController, ResetOutcome, TaskBoard,
    TaskId, TemplateCatalog, ToggleOutcome,
};
use homework_shared::BoardSnapshot;

use crate::api::snapshot::board_snapshot;
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::ClockPort;

/// Errors surfaced to the request layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {entity_type} {id}")]
    NotFound { entity_type: &'static str, id: String },
    #[error("Domain error: {0}")]
    Domain(DomainError),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => AppError::NotFound { entity_type, id },
            other => AppError::Domain(other),
        }
    }
}

/// Main application state: the board, its reset controller, and the clock.
pub struct HomeworkApp {
    board: TaskBoard,
    resets: ResetController,
    clock: Arc<dyn ClockPort>,
}

impl HomeworkApp {
    /// Build a fresh board for the configured roster.
    pub fn new(
        config: &EngineConfig,
        catalog: Arc<TemplateCatalog>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let now = clock.now();
        let board = TaskBoard::initialize(catalog, &config.roster);
        let resets = ResetController::new(config.schedule, now);

        tracing::info!(
            characters = config.roster.len(),
            daily_tasks = board.catalog().templates(Cycle::Daily).len(),
            weekly_tasks = board.catalog().templates(Cycle::Weekly).len(),
            next_daily_reset = %resets.schedule().next_boundary(Cycle::Daily, now),
            next_weekly_reset = %resets.schedule().next_boundary(Cycle::Weekly, now),
            "Homework board initialized"
        );

        Self {
            board,
            resets,
            clock,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Full current state for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        board_snapshot(&self.board)
    }

    pub fn is_character_fully_done(
        &self,
        character: Character,
        cycle: Cycle,
    ) -> Result<bool, AppError> {
        Ok(self.board.is_character_fully_done(character, cycle)?)
    }

    pub fn status(&self, character: Character) -> Result<CharacterStatus, AppError> {
        Ok(self.board.status(character)?)
    }

    /// When `cycle` resets next on its own.
    pub fn next_reset(&self, cycle: Cycle) -> DateTime<Utc> {
        self.resets
            .schedule()
            .next_boundary(cycle, self.clock.now())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// A click on one task card.
    pub fn toggle(
        &mut self,
        character: Character,
        cycle: Cycle,
        task_id: TaskId,
    ) -> Result<ToggleOutcome, AppError> {
        match self.board.toggle(character, cycle, task_id) {
            Ok(outcome) => {
                tracing::debug!(
                    character = %character,
                    cycle = %cycle,
                    task_id = %task_id,
                    outcome = ?outcome,
                    "Task toggled"
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(
                    character = %character,
                    cycle = %cycle,
                    task_id = %task_id,
                    error = %e,
                    "Toggle rejected"
                );
                Err(e.into())
            }
        }
    }

    /// The manual reset button for `cycle`.
    pub fn reset_cycle(&mut self, cycle: Cycle) -> ResetOutcome {
        let outcome = ResetController::reset_cycle(&mut self.board, cycle);
        tracing::info!(
            cycle = %cycle,
            characters = outcome.characters,
            tasks = outcome.tasks_per_character,
            "Cycle reset manually"
        );
        outcome
    }

    /// Apply any scheduled resets that have come due.
    pub fn apply_scheduled_resets(&mut self) -> Vec<ResetOutcome> {
        let now = self.clock.now();
        let outcomes = self.resets.apply_due(&mut self.board, now);
        for outcome in &outcomes {
            tracing::info!(
                cycle = %outcome.cycle,
                characters = outcome.characters,
                boundary = %self.resets.last_applied(outcome.cycle),
                next = %self.resets.schedule().next_boundary(outcome.cycle, now),
                "Scheduled reset applied"
            );
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, ManualClock};
    use crate::infrastructure::ports::MockClockPort;
    use homework_domain::Roster;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().into()
    }

    fn app_at(now: &str) -> HomeworkApp {
        HomeworkApp::new(
            &EngineConfig::default(),
            Arc::new(TemplateCatalog::default()),
            Arc::new(FixedClock(at(now))),
        )
    }

    #[test]
    fn new_app_starts_pending_for_everyone() {
        let app = app_at("2024-01-03T12:00:00+09:00");
        for character in Character::all() {
            assert_eq!(app.status(character).unwrap(), CharacterStatus::Pending);
        }
    }

    #[test]
    fn toggle_updates_snapshot() {
        let mut app = app_at("2024-01-03T12:00:00+09:00");
        let outcome = app
            .toggle(Character::Main, Cycle::Daily, TaskId::new(102))
            .unwrap();
        assert_eq!(
            outcome,
            ToggleOutcome::Progressed {
                count: 1,
                max_count: 2
            }
        );

        let snapshot = app.snapshot();
        let main = snapshot.character(Character::Main).unwrap();
        let barrier = main.daily.tasks.iter().find(|t| t.id == 102).unwrap();
        assert_eq!(barrier.count, Some(1));
        assert!(!barrier.done);
    }

    #[test]
    fn unknown_task_maps_to_not_found() {
        let mut app = app_at("2024-01-03T12:00:00+09:00");
        let err = app
            .toggle(Character::Main, Cycle::Daily, TaskId::new(999))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity_type: "Task", .. }));
    }

    #[test]
    fn unrostered_character_maps_to_not_found() {
        let config = EngineConfig {
            roster: Roster::with_alt_slots(0).unwrap(),
            ..EngineConfig::default()
        };
        let app = HomeworkApp::new(
            &config,
            Arc::new(TemplateCatalog::default()),
            Arc::new(FixedClock(at("2024-01-03T12:00:00+09:00"))),
        );
        assert!(matches!(
            app.status(Character::Alt1),
            Err(AppError::NotFound {
                entity_type: "Character",
                ..
            })
        ));
    }

    #[test]
    fn manual_reset_clears_cycle() {
        let mut app = app_at("2024-01-03T12:00:00+09:00");
        app.toggle(Character::Alt2, Cycle::Weekly, TaskId::new(11))
            .unwrap();

        let outcome = app.reset_cycle(Cycle::Weekly);
        assert_eq!(outcome.characters, 4);
        assert_eq!(outcome.tasks_per_character, 6);
        assert!(app
            .board()
            .tasks(Character::Alt2, Cycle::Weekly)
            .unwrap()
            .iter()
            .all(|t| !t.is_done()));
    }

    #[test]
    fn scheduled_reset_follows_the_clock() {
        let clock = Arc::new(ManualClock::new(at("2024-01-03T12:00:00+09:00")));
        let mut app = HomeworkApp::new(
            &EngineConfig::default(),
            Arc::new(TemplateCatalog::default()),
            clock.clone(),
        );
        app.toggle(Character::Main, Cycle::Daily, TaskId::new(101))
            .unwrap();
        app.toggle(Character::Main, Cycle::Weekly, TaskId::new(16))
            .unwrap();

        assert!(app.apply_scheduled_resets().is_empty());

        clock.set(at("2024-01-04T06:00:00+09:00"));
        let outcomes = app.apply_scheduled_resets();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].cycle, Cycle::Daily);

        let daily = app.board().tasks(Character::Main, Cycle::Daily).unwrap();
        assert!(daily.iter().all(|t| !t.is_done()));
        let raid = app
            .board()
            .task(Character::Main, Cycle::Weekly, TaskId::new(16))
            .unwrap();
        assert!(raid.is_done());
    }

    #[test]
    fn next_reset_uses_the_injected_clock() {
        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .return_const(at("2024-01-03T12:00:00+09:00"));

        let app = HomeworkApp::new(
            &EngineConfig::default(),
            Arc::new(TemplateCatalog::default()),
            Arc::new(clock),
        );
        assert_eq!(
            app.next_reset(Cycle::Daily),
            at("2024-01-04T06:00:00+09:00")
        );
        assert_eq!(
            app.next_reset(Cycle::Weekly),
            at("2024-01-08T06:00:00+09:00")
        );
    }
}
