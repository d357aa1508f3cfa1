//! Draft input shapes for pending submissions.
//!
//! Drafts carry raw form text and are validated only at submission; the
//! mutation layer trims required text and normalizes blank optionals to
//! absent before committing an entry.

use crate::model::dashboard::{Energy, TaskContext};

/// Pending task form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub context: TaskContext,
    pub energy: Energy,
    /// Raw "HH:MM" input; blank means no due time.
    pub due: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            context: TaskContext::Work,
            energy: Energy::Deep,
            due: String::new(),
        }
    }
}

/// Pending schedule block form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDraft {
    pub title: String,
    /// Raw "HH:MM" input; required at submission.
    pub time: String,
    /// Blank means no location.
    pub location: String,
}
