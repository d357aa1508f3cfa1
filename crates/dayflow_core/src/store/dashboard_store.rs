//! Owned state cell synchronizing snapshots with persistence.
//!
//! # Responsibility
//! - Own the current snapshot and expose the mutation entry points.
//! - Keep the persistence backend eventually consistent with the snapshot.
//!
//! # Invariants
//! - No persistence write happens before `hydrate()` completes, so a
//!   transient seed snapshot can never overwrite real stored data.
//! - Mutation entry points succeed independent of persistence outcome; the
//!   in-memory snapshot stays authoritative for the session.
//! - Writes are synchronous with mutations, so the persisted sequence
//!   follows mutation order.

use crate::model::dashboard::{DashboardState, EntryId};
use crate::model::draft::{EventDraft, TaskDraft};
use crate::repo::state_repo::StateRepository;
use crate::store::{hydrate, mutations};
use log::{info, warn};

/// The single state cell for one dashboard session.
///
/// Consumers receive the store explicitly; there is no ambient singleton.
/// All reads go through [`DashboardStore::snapshot`] and all writes through
/// the mutation entry points below.
pub struct DashboardStore<R: StateRepository> {
    repo: R,
    snapshot: DashboardState,
    hydrated: bool,
}

impl<R: StateRepository> DashboardStore<R> {
    /// Creates a store over the given repository, seeded but not hydrated.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            snapshot: DashboardState::seed(),
            hydrated: false,
        }
    }

    /// Loads persisted state and reconciles it over the seed defaults.
    ///
    /// Runs once; later calls are no-ops. Never fails outwardly: a missing,
    /// unreadable or unparseable payload leaves the seed snapshot in place
    /// with a diagnostic logged.
    pub fn hydrate(&mut self) -> &DashboardState {
        if self.hydrated {
            return &self.snapshot;
        }

        let raw = match self.repo.load() {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=hydrate module=store status=fallback error_code=load_failed error={err}"
                );
                None
            }
        };

        self.snapshot = hydrate::hydrate_state(raw.as_deref());
        self.hydrated = true;
        info!(
            "event=hydrate module=store status=ok tasks={} events={} habits={}",
            self.snapshot.tasks.len(),
            self.snapshot.events.len(),
            self.snapshot.habits.len()
        );
        &self.snapshot
    }

    /// Current snapshot. Changes only through the mutation entry points.
    pub fn snapshot(&self) -> &DashboardState {
        &self.snapshot
    }

    /// Whether `hydrate()` has completed.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// See [`mutations::set_focus`].
    pub fn set_focus(&mut self, focus: impl Into<String>) -> &DashboardState {
        self.apply(mutations::set_focus(&self.snapshot, focus))
    }

    /// See [`mutations::toggle_task`].
    pub fn toggle_task(&mut self, id: &EntryId) -> &DashboardState {
        self.apply(mutations::toggle_task(&self.snapshot, id))
    }

    /// See [`mutations::toggle_habit`].
    pub fn toggle_habit(&mut self, id: &EntryId) -> &DashboardState {
        self.apply(mutations::toggle_habit(&self.snapshot, id))
    }

    /// See [`mutations::set_mood`].
    pub fn set_mood(&mut self, mood: impl Into<String>) -> &DashboardState {
        self.apply(mutations::set_mood(&self.snapshot, mood))
    }

    /// See [`mutations::add_task`].
    pub fn add_task(&mut self, draft: &TaskDraft) -> &DashboardState {
        self.apply(mutations::add_task(&self.snapshot, draft))
    }

    /// See [`mutations::add_event`].
    pub fn add_event(&mut self, draft: &EventDraft) -> &DashboardState {
        self.apply(mutations::add_event(&self.snapshot, draft))
    }

    /// See [`mutations::set_note`].
    pub fn set_note(&mut self, note: impl Into<String>) -> &DashboardState {
        self.apply(mutations::set_note(&self.snapshot, note))
    }

    /// See [`mutations::set_water`].
    pub fn set_water(&mut self, water: u8) -> &DashboardState {
        self.apply(mutations::set_water(&self.snapshot, water))
    }

    /// See [`mutations::set_sleep`].
    pub fn set_sleep(&mut self, sleep: f64) -> &DashboardState {
        self.apply(mutations::set_sleep(&self.snapshot, sleep))
    }

    fn apply(&mut self, next: DashboardState) -> &DashboardState {
        self.snapshot = next;
        self.persist();
        &self.snapshot
    }

    // Fire-and-forget: encode/save failures are logged, never surfaced to
    // the mutation caller.
    fn persist(&self) {
        if !self.hydrated {
            return;
        }

        let payload = match serde_json::to_string(&self.snapshot) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    "event=persist module=store status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };

        if let Err(err) = self.repo.save(&payload) {
            warn!("event=persist module=store status=error error_code=save_failed error={err}");
        }
    }
}
