//! Task templates - the immutable homework definitions
//!
//! A template describes one checklist item of a cycle. Every character gets its
//! own runtime [`TaskInstance`](super::TaskInstance) built from it; the
//! templates themselves are shared read-only through an `Arc<TemplateCatalog>`.

use std::collections::HashSet;
use std::num::NonZeroU32;

use serde::Serialize;

use crate::{Cycle, DomainError, TaskId};

/// Static definition of one homework item.
///
/// # Invariants
///
/// - `name` is non-empty after trimming
/// - `max_count`, when present, is at least 1 (enforced by `NonZeroU32`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplate {
    id: TaskId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_count: Option<NonZeroU32>,
}

impl TaskTemplate {
    /// Create a simple on/off task.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is blank.
    pub fn simple(id: impl Into<TaskId>, name: impl Into<String>) -> Result<Self, DomainError> {
        Self::build(id.into(), name.into(), None)
    }

    /// Create a task that must be repeated `max_count` times.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is blank or `max_count` is zero.
    pub fn counted(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        max_count: u32,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let max_count = NonZeroU32::new(max_count).ok_or_else(|| {
            DomainError::validation(format!("Task {} must require at least one repetition", id))
        })?;
        Self::build(id, name.into(), Some(max_count))
    }

    fn build(id: TaskId, name: String, max_count: Option<NonZeroU32>) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Task {} name cannot be empty",
                id
            )));
        }
        Ok(Self {
            id,
            name,
            max_count,
        })
    }

    #[inline]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn max_count(&self) -> Option<NonZeroU32> {
        self.max_count
    }

    /// Returns true if this task is completed by repetition rather than a toggle.
    #[inline]
    pub fn is_counted(&self) -> bool {
        self.max_count.is_some()
    }
}

/// The ordered template lists for both cycles.
///
/// Order is display order and is preserved in every character's instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateCatalog {
    daily: Vec<TaskTemplate>,
    weekly: Vec<TaskTemplate>,
}

impl TemplateCatalog {
    /// Create a catalog from the two template lists.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a task id repeats within one cycle.
    /// The same id may appear in both cycles.
    pub fn new(daily: Vec<TaskTemplate>, weekly: Vec<TaskTemplate>) -> Result<Self, DomainError> {
        ensure_unique_ids(Cycle::Daily, &daily)?;
        ensure_unique_ids(Cycle::Weekly, &weekly)?;
        Ok(Self { daily, weekly })
    }

    /// The homework sheet for Mabinogi Mobile.
    pub fn mabinogi_mobile() -> Self {
        let daily = vec![
            preset(101, "물물 교환", None),
            preset(102, "결계 2회", Some(times(2))),
            preset(103, "검은 구멍 3회", Some(times(3))),
            preset(104, "오전 알바", None),
            preset(105, "오후 알바", None),
        ];
        let weekly = vec![
            preset(11, "주간 재료 구매", None),
            preset(12, "마물 증표 교환", None),
            preset(13, "임무 게시판", None),
            preset(14, "필드 보스", None),
            preset(15, "어비스", None),
            preset(16, "레이드", None),
        ];
        Self { daily, weekly }
    }

    /// Templates for `cycle`, in display order.
    pub fn templates(&self, cycle: Cycle) -> &[TaskTemplate] {
        match cycle {
            Cycle::Daily => &self.daily,
            Cycle::Weekly => &self.weekly,
        }
    }

    /// Look up one template.
    pub fn template(&self, cycle: Cycle, id: TaskId) -> Option<&TaskTemplate> {
        self.templates(cycle).iter().find(|t| t.id == id)
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::mabinogi_mobile()
    }
}

fn ensure_unique_ids(cycle: Cycle, templates: &[TaskTemplate]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(templates.len());
    for template in templates {
        if !seen.insert(template.id) {
            return Err(DomainError::validation(format!(
                "Duplicate task id {} in {} templates",
                template.id, cycle
            )));
        }
    }
    Ok(())
}

// Preset names are known non-empty, so the checked constructors are bypassed.
fn preset(id: u32, name: &str, max_count: Option<NonZeroU32>) -> TaskTemplate {
    TaskTemplate {
        id: TaskId::new(id),
        name: name.to_string(),
        max_count,
    }
}

const fn times(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => NonZeroU32::MIN,
    }
}
