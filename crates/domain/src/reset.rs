//! Schedule reset controller
//!
//! Restores one cycle's task instances to their initial state for every
//! character. Resets happen two ways:
//! - Manually, through [`ResetController::reset_cycle`]
//! - On schedule, through [`ResetController::apply_due`], which compares the
//!   latest reset boundary against the last one applied

use chrono::{DateTime, Utc};

use crate::events::ResetOutcome;
use crate::value_objects::ResetSchedule;
use crate::{Cycle, TaskBoard};

/// Tracks which scheduled resets have already been applied to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetController {
    schedule: ResetSchedule,
    daily_applied: DateTime<Utc>,
    weekly_applied: DateTime<Utc>,
}

impl ResetController {
    /// Create a controller for a board that was freshly initialized at `now`.
    ///
    /// The boundaries at or before `now` count as already applied.
    pub fn new(schedule: ResetSchedule, now: DateTime<Utc>) -> Self {
        Self {
            schedule,
            daily_applied: schedule.latest_boundary(Cycle::Daily, now),
            weekly_applied: schedule.latest_boundary(Cycle::Weekly, now),
        }
    }

    #[inline]
    pub fn schedule(&self) -> &ResetSchedule {
        &self.schedule
    }

    /// The last scheduled boundary applied for `cycle`.
    pub fn last_applied(&self, cycle: Cycle) -> DateTime<Utc> {
        match cycle {
            Cycle::Daily => self.daily_applied,
            Cycle::Weekly => self.weekly_applied,
        }
    }

    fn last_applied_mut(&mut self, cycle: Cycle) -> &mut DateTime<Utc> {
        match cycle {
            Cycle::Daily => &mut self.daily_applied,
            Cycle::Weekly => &mut self.weekly_applied,
        }
    }

    /// Reset `cycle` for every character on the board.
    ///
    /// Each instance of `cycle` is replaced by a fresh build from its template;
    /// the other cycle is untouched. Resetting an already fresh cycle leaves the
    /// board equal to what it was.
    pub fn reset_cycle(board: &mut TaskBoard, cycle: Cycle) -> ResetOutcome {
        board.rebuild_cycle(cycle)
    }

    /// Cycles whose reset boundary has passed since it was last applied.
    pub fn due_cycles(&self, now: DateTime<Utc>) -> Vec<Cycle> {
        Cycle::all()
            .into_iter()
            .filter(|&cycle| self.schedule.latest_boundary(cycle, now) > self.last_applied(cycle))
            .collect()
    }

    /// Apply every scheduled reset that has come due by `now`.
    ///
    /// Several missed boundaries of one cycle collapse into a single reset.
    /// A clock that moved backwards triggers nothing.
    pub fn apply_due(&mut self, board: &mut TaskBoard, now: DateTime<Utc>) -> Vec<ResetOutcome> {
        let mut outcomes = Vec::new();
        for cycle in self.due_cycles(now) {
            let boundary = self.schedule.latest_boundary(cycle, now);
            *self.last_applied_mut(cycle) = boundary;
            outcomes.push(Self::reset_cycle(board, cycle));
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Character, Roster, TaskId, TemplateCatalog};

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().into()
    }

    fn board() -> TaskBoard {
        TaskBoard::initialize(Arc::new(TemplateCatalog::default()), &Roster::default())
    }

    fn touch_everything(board: &mut TaskBoard) {
        for character in Character::all() {
            for cycle in Cycle::all() {
                let ids: Vec<TaskId> = board
                    .catalog()
                    .templates(cycle)
                    .iter()
                    .map(|t| t.id())
                    .collect();
                for id in ids {
                    board.toggle(character, cycle, id).unwrap();
                }
            }
        }
    }

    #[test]
    fn reset_daily_leaves_weekly_untouched() {
        let mut board = board();
        touch_everything(&mut board);
        let before = board.clone();

        let outcome = ResetController::reset_cycle(&mut board, Cycle::Daily);
        assert_eq!(outcome.cycle, Cycle::Daily);
        assert_eq!(outcome.characters, 4);

        let fresh = self::board();
        for character in Character::all() {
            assert_eq!(
                board.tasks(character, Cycle::Weekly).unwrap(),
                before.tasks(character, Cycle::Weekly).unwrap()
            );
            assert_eq!(
                board.tasks(character, Cycle::Daily).unwrap(),
                fresh.tasks(character, Cycle::Daily).unwrap()
            );
        }
    }

    #[test]
    fn reset_weekly_leaves_daily_untouched() {
        let mut board = board();
        touch_everything(&mut board);
        let before = board.clone();

        ResetController::reset_cycle(&mut board, Cycle::Weekly);

        for character in Character::all() {
            assert_eq!(
                board.tasks(character, Cycle::Daily).unwrap(),
                before.tasks(character, Cycle::Daily).unwrap()
            );
            assert!(board
                .tasks(character, Cycle::Weekly)
                .unwrap()
                .iter()
                .all(|t| !t.is_done() && t.count().unwrap_or(0) == 0));
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut board = board();
        touch_everything(&mut board);

        ResetController::reset_cycle(&mut board, Cycle::Daily);
        let once = board.clone();
        ResetController::reset_cycle(&mut board, Cycle::Daily);
        assert_eq!(board, once);

        let mut fresh = self::board();
        ResetController::reset_cycle(&mut fresh, Cycle::Weekly);
        assert_eq!(fresh, self::board());
    }

    #[test]
    fn nothing_is_due_right_after_startup() {
        let now = at("2024-01-03T12:00:00+09:00");
        let controller = ResetController::new(ResetSchedule::default(), now);
        assert!(controller.due_cycles(now).is_empty());
        assert!(controller
            .due_cycles(at("2024-01-04T05:59:59+09:00"))
            .is_empty());
    }

    #[test]
    fn daily_boundary_triggers_only_daily_reset() {
        let mut board = board();
        let mut controller =
            ResetController::new(ResetSchedule::default(), at("2024-01-03T12:00:00+09:00"));
        touch_everything(&mut board);
        let weekly_before = board.clone();

        let outcomes = controller.apply_due(&mut board, at("2024-01-04T06:00:00+09:00"));
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].cycle, Cycle::Daily);
        assert!(!board
            .is_character_fully_done(Character::Main, Cycle::Daily)
            .unwrap());
        assert_eq!(
            board.tasks(Character::Main, Cycle::Weekly).unwrap(),
            weekly_before.tasks(Character::Main, Cycle::Weekly).unwrap()
        );
        assert_eq!(
            controller.last_applied(Cycle::Daily),
            at("2024-01-04T06:00:00+09:00")
        );

        // Same boundary is not applied twice
        touch_everything(&mut board);
        assert!(controller
            .apply_due(&mut board, at("2024-01-04T09:00:00+09:00"))
            .is_empty());
    }

    #[test]
    fn monday_reset_triggers_both_cycles() {
        let mut board = board();
        let mut controller =
            ResetController::new(ResetSchedule::default(), at("2024-01-07T20:00:00+09:00"));
        touch_everything(&mut board);

        let outcomes = controller.apply_due(&mut board, at("2024-01-08T06:30:00+09:00"));
        let cycles: Vec<Cycle> = outcomes.iter().map(|o| o.cycle).collect();
        assert_eq!(cycles, vec![Cycle::Daily, Cycle::Weekly]);
        assert_eq!(board, self::board());
    }

    #[test]
    fn missed_days_collapse_into_one_reset() {
        let mut board = board();
        let mut controller =
            ResetController::new(ResetSchedule::default(), at("2024-01-02T12:00:00+09:00"));

        let outcomes = controller.apply_due(&mut board, at("2024-01-05T12:00:00+09:00"));
        assert_eq!(outcomes.len(), 1);
        assert_eq!(
            controller.last_applied(Cycle::Daily),
            at("2024-01-05T06:00:00+09:00")
        );
    }

    #[test]
    fn clock_moving_backwards_triggers_nothing() {
        let mut board = board();
        let mut controller =
            ResetController::new(ResetSchedule::default(), at("2024-01-10T12:00:00+09:00"));
        touch_everything(&mut board);
        let before = board.clone();

        assert!(controller
            .apply_due(&mut board, at("2024-01-03T12:00:00+09:00"))
            .is_empty());
        assert_eq!(board, before);
    }
}
