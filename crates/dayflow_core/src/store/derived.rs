//! Read-only projections computed from a snapshot.
//!
//! Nothing here is stored; every value is recomputed from the current
//! snapshot on demand.

use crate::model::dashboard::{DashboardState, Task, TaskContext};

/// Cups represented by a full hydration bar.
const WATER_TARGET_CUPS: f64 = 8.0;

/// Tasks split into the two fixed context buckets, relative order preserved.
#[derive(Debug)]
pub struct TasksByContext<'a> {
    pub work: Vec<&'a Task>,
    pub personal: Vec<&'a Task>,
}

/// Count of completed tasks.
pub fn completed_task_count(state: &DashboardState) -> usize {
    state.tasks.iter().filter(|task| task.completed).count()
}

/// Completion percentage over all tasks, rounded.
///
/// Exactly 0 for an empty task list.
pub fn task_completion_percent(state: &DashboardState) -> u8 {
    if state.tasks.is_empty() {
        return 0;
    }
    let ratio = completed_task_count(state) as f64 / state.tasks.len() as f64;
    (ratio * 100.0).round() as u8
}

/// Count of completed habits.
pub fn completed_habit_count(state: &DashboardState) -> usize {
    state.habits.iter().filter(|habit| habit.completed).count()
}

/// Water progress as a percentage, capped at 100.
///
/// The cap holds even for out-of-domain counts that bypassed input clamping.
pub fn hydration_percent(state: &DashboardState) -> u8 {
    let percent = (f64::from(state.water) / WATER_TARGET_CUPS * 100.0).round();
    percent.min(100.0) as u8
}

/// Partitions tasks into the fixed {Work, Personal} buckets.
pub fn tasks_by_context(state: &DashboardState) -> TasksByContext<'_> {
    let mut buckets = TasksByContext {
        work: Vec::new(),
        personal: Vec::new(),
    };
    for task in &state.tasks {
        match task.context {
            TaskContext::Work => buckets.work.push(task),
            TaskContext::Personal => buckets.personal.push(task),
        }
    }
    buckets
}
