//! Task instances - one character's runtime copy of a template
//!
//! # Single source of truth
//!
//! Count-based tasks store only `count`; completion is derived from
//! `count >= max_count` on every read, so the two can never disagree.
//! Simple tasks store a plain `done` flag.

use std::num::NonZeroU32;

use crate::events::ToggleOutcome;
use crate::{TaskId, TaskTemplate};

/// Progress of one task instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskProgress {
    /// Simple task, flipped on and off
    Check { done: bool },
    /// Task repeated up to `max_count` times
    Count { count: u32, max_count: NonZeroU32 },
}

impl TaskProgress {
    fn fresh(max_count: Option<NonZeroU32>) -> Self {
        match max_count {
            Some(max_count) => TaskProgress::Count {
                count: 0,
                max_count,
            },
            None => TaskProgress::Check { done: false },
        }
    }
}

/// Per-character, per-cycle runtime state for a [`TaskTemplate`].
///
/// Only the board mutates instances; outside the crate they are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInstance {
    task_id: TaskId,
    progress: TaskProgress,
}

impl TaskInstance {
    /// Build the initial state for `template` (`done = false`, `count = 0`).
    pub fn fresh(template: &TaskTemplate) -> Self {
        Self {
            task_id: template.id(),
            progress: TaskProgress::fresh(template.max_count()),
        }
    }

    #[inline]
    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    #[inline]
    pub fn progress(&self) -> TaskProgress {
        self.progress
    }

    /// Returns true if the task is currently complete.
    pub fn is_done(&self) -> bool {
        match self.progress {
            TaskProgress::Check { done } => done,
            TaskProgress::Count { count, max_count } => count >= max_count.get(),
        }
    }

    /// Repetitions so far, for count-based tasks.
    pub fn count(&self) -> Option<u32> {
        match self.progress {
            TaskProgress::Count { count, .. } => Some(count),
            TaskProgress::Check { .. } => None,
        }
    }

    /// Repetitions required, for count-based tasks.
    pub fn max_count(&self) -> Option<NonZeroU32> {
        match self.progress {
            TaskProgress::Count { max_count, .. } => Some(max_count),
            TaskProgress::Check { .. } => None,
        }
    }

    /// Apply one click.
    ///
    /// Simple tasks flip. Count-based tasks advance by one until complete; a
    /// click on a complete count-based task restarts it at zero.
    pub(crate) fn toggle(&mut self) -> ToggleOutcome {
        match &mut self.progress {
            TaskProgress::Check { done } => {
                *done = !*done;
                if *done {
                    ToggleOutcome::Checked
                } else {
                    ToggleOutcome::Unchecked
                }
            }
            TaskProgress::Count { count, max_count } => {
                let max = max_count.get();
                if *count >= max {
                    *count = 0;
                    ToggleOutcome::Restarted { max_count: max }
                } else {
                    *count += 1;
                    if *count >= max {
                        ToggleOutcome::Completed { max_count: max }
                    } else {
                        ToggleOutcome::Progressed {
                            count: *count,
                            max_count: max,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(max_count: u32) -> TaskInstance {
        TaskInstance::fresh(&TaskTemplate::counted(102u32, "결계 2회", max_count).unwrap())
    }

    fn assert_invariant(instance: &TaskInstance) {
        if let (Some(count), Some(max)) = (instance.count(), instance.max_count()) {
            assert_eq!(instance.is_done(), count >= max.get());
        }
    }

    #[test]
    fn fresh_instances_start_incomplete() {
        let simple = TaskInstance::fresh(&TaskTemplate::simple(101u32, "물물 교환").unwrap());
        assert!(!simple.is_done());
        assert_eq!(simple.count(), None);
        assert_eq!(simple.max_count(), None);

        let counted = counted(3);
        assert!(!counted.is_done());
        assert_eq!(counted.count(), Some(0));
    }

    #[test]
    fn simple_toggle_is_an_involution() {
        let mut task = TaskInstance::fresh(&TaskTemplate::simple(101u32, "물물 교환").unwrap());
        let original = task.clone();

        assert_eq!(task.toggle(), ToggleOutcome::Checked);
        assert!(task.is_done());
        assert_eq!(task.toggle(), ToggleOutcome::Unchecked);
        assert_eq!(task, original);
    }

    #[test]
    fn counted_task_walks_through_its_cycle() {
        let mut task = counted(2);

        assert_eq!(
            task.toggle(),
            ToggleOutcome::Progressed {
                count: 1,
                max_count: 2
            }
        );
        assert_eq!((task.count(), task.is_done()), (Some(1), false));

        assert_eq!(task.toggle(), ToggleOutcome::Completed { max_count: 2 });
        assert_eq!((task.count(), task.is_done()), (Some(2), true));

        assert_eq!(task.toggle(), ToggleOutcome::Restarted { max_count: 2 });
        assert_eq!((task.count(), task.is_done()), (Some(0), false));
    }

    #[test]
    fn repeated_full_cycles_return_to_start() {
        let mut task = counted(3);
        let fresh = task.clone();

        for _ in 0..4 {
            for _ in 0..3 {
                task.toggle();
                assert_invariant(&task);
            }
            assert!(task.is_done());
            assert_eq!(task.count(), Some(3));

            task.toggle();
            assert_invariant(&task);
            assert_eq!(task, fresh);
        }
    }

    #[test]
    fn single_repetition_task_completes_in_one_click() {
        let mut task = counted(1);
        assert_eq!(task.toggle(), ToggleOutcome::Completed { max_count: 1 });
        assert!(task.is_done());
        assert_eq!(task.toggle(), ToggleOutcome::Restarted { max_count: 1 });
        assert!(!task.is_done());
    }
}
