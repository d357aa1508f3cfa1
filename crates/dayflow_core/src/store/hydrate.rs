//! Hydration: reconstructing a snapshot from a persisted payload.
//!
//! # Responsibility
//! - Decode arbitrary persisted payloads without failing outwardly.
//! - Reconcile decoded fields over seed defaults, one field at a time.
//!
//! # Invariants
//! - Hydration never returns an error; worst case is the seed snapshot.
//! - An empty persisted collection falls back to the seed collection for
//!   that field alone, never for the whole state.

use crate::model::dashboard::{DashboardState, Habit, ScheduleEvent, Task};
use log::warn;
use serde::Deserialize;

/// All-optional mirror of `DashboardState`.
///
/// Decodes payloads that omit fields added or removed across versions, so
/// wire drift degrades through the per-field overlay instead of discarding
/// the whole payload.
#[derive(Debug, Default, Deserialize)]
pub struct PartialDashboardState {
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    #[serde(default)]
    pub events: Option<Vec<ScheduleEvent>>,
    #[serde(default)]
    pub habits: Option<Vec<Habit>>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub water: Option<u8>,
    #[serde(default)]
    pub sleep: Option<f64>,
    #[serde(default)]
    pub mood: Option<String>,
}

/// Overlays decoded fields onto the seed snapshot.
///
/// Scalar fields adopt the decoded value when present. The three collections
/// adopt the decoded array only when it is non-empty; an absent or empty
/// array keeps the seed collection for that field alone.
pub fn reconcile(seed: DashboardState, partial: PartialDashboardState) -> DashboardState {
    DashboardState {
        focus: partial.focus.unwrap_or(seed.focus),
        tasks: non_empty_or(partial.tasks, seed.tasks),
        events: non_empty_or(partial.events, seed.events),
        habits: non_empty_or(partial.habits, seed.habits),
        note: partial.note.unwrap_or(seed.note),
        water: partial.water.unwrap_or(seed.water),
        sleep: partial.sleep.unwrap_or(seed.sleep),
        mood: partial.mood.unwrap_or(seed.mood),
    }
}

/// Builds the live snapshot from a raw persisted payload.
///
/// - Absent payload: seed defaults.
/// - Unparseable payload: seed defaults, with a diagnostic logged.
/// - Parseable payload: seed defaults overlaid via [`reconcile`].
pub fn hydrate_state(raw: Option<&str>) -> DashboardState {
    let seed = DashboardState::seed();
    let Some(text) = raw else {
        return seed;
    };

    match serde_json::from_str::<PartialDashboardState>(text) {
        Ok(partial) => reconcile(seed, partial),
        Err(err) => {
            warn!(
                "event=hydrate module=store status=fallback error_code=parse_failed error={err}"
            );
            seed
        }
    }
}

fn non_empty_or<T>(parsed: Option<Vec<T>>, seed: Vec<T>) -> Vec<T> {
    match parsed {
        Some(items) if !items.is_empty() => items,
        _ => seed,
    }
}
