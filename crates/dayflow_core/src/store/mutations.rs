//! Pure snapshot transitions.
//!
//! # Responsibility
//! - Derive the next snapshot from the current one plus one user input.
//!
//! # Invariants
//! - Functions never mutate the input snapshot; they return a new value.
//! - Invalid input (required text trimming to empty) returns the snapshot
//!   unchanged and consumes no fresh id.
//! - Collections not targeted by a transition are carried over unchanged.

use crate::model::dashboard::{DashboardState, EntryId, ScheduleEvent, Task};
use crate::model::draft::{EventDraft, TaskDraft};

/// Replaces the day's stated focus. Empty text is allowed.
pub fn set_focus(state: &DashboardState, focus: impl Into<String>) -> DashboardState {
    DashboardState {
        focus: focus.into(),
        ..state.clone()
    }
}

/// Flips completion on the matching task. Unknown id is a no-op.
pub fn toggle_task(state: &DashboardState, id: &EntryId) -> DashboardState {
    DashboardState {
        tasks: state
            .tasks
            .iter()
            .map(|task| {
                if &task.id == id {
                    Task {
                        completed: !task.completed,
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect(),
        ..state.clone()
    }
}

/// Flips completion on the matching habit. Unknown id is a no-op.
pub fn toggle_habit(state: &DashboardState, id: &EntryId) -> DashboardState {
    DashboardState {
        habits: state
            .habits
            .iter()
            .map(|habit| {
                if &habit.id == id {
                    let mut toggled = habit.clone();
                    toggled.completed = !habit.completed;
                    toggled
                } else {
                    habit.clone()
                }
            })
            .collect(),
        ..state.clone()
    }
}

/// Replaces the recorded mood.
///
/// Free text at this layer; `MOOD_PALETTE` is a suggestion, not a schema.
pub fn set_mood(state: &DashboardState, mood: impl Into<String>) -> DashboardState {
    DashboardState {
        mood: mood.into(),
        ..state.clone()
    }
}

/// Prepends a new task built from the draft.
///
/// Rejects a draft whose title trims to empty: no state change, no id
/// consumed. A blank `due` is stored as absent rather than as empty text.
pub fn add_task(state: &DashboardState, draft: &TaskDraft) -> DashboardState {
    let title = draft.title.trim();
    if title.is_empty() {
        return state.clone();
    }

    let task = Task {
        id: EntryId::fresh(),
        title: title.to_string(),
        context: draft.context,
        energy: draft.energy,
        due: normalize_optional(&draft.due),
        completed: false,
    };

    let mut tasks = Vec::with_capacity(state.tasks.len() + 1);
    tasks.push(task);
    tasks.extend(state.tasks.iter().cloned());

    DashboardState {
        tasks,
        ..state.clone()
    }
}

/// Appends a new schedule block built from the draft.
///
/// Rejects a draft whose title or time trims to empty. A blank location is
/// stored as absent.
pub fn add_event(state: &DashboardState, draft: &EventDraft) -> DashboardState {
    let title = draft.title.trim();
    let time = draft.time.trim();
    if title.is_empty() || time.is_empty() {
        return state.clone();
    }

    let mut events = state.events.clone();
    events.push(ScheduleEvent {
        id: EntryId::fresh(),
        title: title.to_string(),
        time: time.to_string(),
        location: normalize_optional(&draft.location),
    });

    DashboardState {
        events,
        ..state.clone()
    }
}

/// Replaces the free-form note text.
pub fn set_note(state: &DashboardState, note: impl Into<String>) -> DashboardState {
    DashboardState {
        note: note.into(),
        ..state.clone()
    }
}

/// Replaces the water count. The input mechanism clamps to [0, 8].
pub fn set_water(state: &DashboardState, water: u8) -> DashboardState {
    DashboardState {
        water,
        ..state.clone()
    }
}

/// Replaces sleep hours. The input mechanism clamps to [5.0, 9.0] step 0.5.
pub fn set_sleep(state: &DashboardState, sleep: f64) -> DashboardState {
    DashboardState {
        sleep,
        ..state.clone()
    }
}

fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
