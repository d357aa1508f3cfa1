//! Core state model for the DayFlow daily planning dashboard.
//! This crate is the single source of truth for snapshot invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dashboard::{
    DashboardState, Energy, EntryId, Habit, ScheduleEvent, Task, TaskContext, MOOD_PALETTE,
};
pub use model::draft::{EventDraft, TaskDraft};
pub use repo::state_repo::{
    MemoryStateRepository, RepoError, RepoResult, SqliteStateRepository, StateRepository,
    STATE_STORAGE_KEY,
};
pub use store::dashboard_store::DashboardStore;
pub use store::derived::{
    completed_habit_count, completed_task_count, hydration_percent, task_completion_percent,
    tasks_by_context, TasksByContext,
};
pub use store::hydrate::{hydrate_state, reconcile, PartialDashboardState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
