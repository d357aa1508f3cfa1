//! Dashboard state model.
//!
//! # Responsibility
//! - Define the canonical snapshot shape shared by store and persistence.
//! - Provide the seed defaults used at first run and as hydration fallback.
//!
//! # Invariants
//! - `id` values are generated at creation and never reused or mutated.
//! - `context` and `energy` are closed enumerations; `mood` is free text
//!   seeded from `MOOD_PALETTE` but not enforced as a closed set.
//! - Serialized field names match the persisted wire format exactly, so
//!   payloads written by earlier versions keep decoding.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Seeded mood palette offered to the presentation layer.
///
/// The store accepts any mood text; this is the suggested set, not a schema.
pub const MOOD_PALETTE: [&str; 5] = ["Grounded", "Curious", "Energized", "Rested", "Playful"];

/// Opaque per-entry identifier.
///
/// Generated as a freshness token (UUIDv4), never derived from content.
/// Kept as a string newtype so ids from foreign payloads survive hydration
/// regardless of their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generates a fresh id, practically unique for session-scale counts.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Which life bucket a task belongs to.
///
/// Serialized with the exact bucket labels (`Work`/`Personal`) used on the
/// wire and in the partition buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskContext {
    Work,
    Personal,
}

/// Kind of attention a task demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Energy {
    Deep,
    Light,
    Admin,
}

/// One actionable item on the task canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntryId,
    pub title: String,
    pub context: TaskContext,
    pub energy: Energy,
    /// Time-of-day "HH:MM". Omitted from the wire when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// One planned block on the schedule. Collection order is insertion order,
/// not time order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: EntryId,
    pub title: String,
    /// Time-of-day "HH:MM".
    pub time: String,
    /// Omitted from the wire when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// One daily ritual toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: EntryId,
    pub label: String,
    #[serde(default)]
    pub completed: bool,
}

/// Root aggregate: the full dashboard snapshot at one instant.
///
/// Snapshots are immutable values; mutation operations build a new snapshot
/// rather than editing nested structures in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// The day's single stated priority. May be empty.
    pub focus: String,
    /// Newest first on creation.
    pub tasks: Vec<Task>,
    /// Insertion order.
    pub events: Vec<ScheduleEvent>,
    /// Fixed set seeded at first run.
    pub habits: Vec<Habit>,
    pub note: String,
    /// Cups of water, domain [0, 8]. Clamped by the input mechanism.
    pub water: u8,
    /// Hours, domain [5.0, 9.0] in 0.5 steps. Clamped by the input mechanism.
    pub sleep: f64,
    pub mood: String,
}

impl DashboardState {
    /// Seed defaults: the fixed initial state used when no valid persisted
    /// data exists.
    pub fn seed() -> Self {
        Self {
            focus: "Shape the day with clarity".to_string(),
            note: String::new(),
            mood: "Grounded".to_string(),
            water: 5,
            sleep: 7.0,
            tasks: vec![
                Task {
                    id: EntryId::fresh(),
                    title: "Deep work: strategy outline".to_string(),
                    context: TaskContext::Work,
                    energy: Energy::Deep,
                    due: Some("09:30".to_string()),
                    completed: false,
                },
                Task {
                    id: EntryId::fresh(),
                    title: "Inbox zero + weekly update".to_string(),
                    context: TaskContext::Work,
                    energy: Energy::Admin,
                    due: Some("11:30".to_string()),
                    completed: false,
                },
                Task {
                    id: EntryId::fresh(),
                    title: "Walk + podcast episode".to_string(),
                    context: TaskContext::Personal,
                    energy: Energy::Light,
                    due: Some("13:00".to_string()),
                    completed: true,
                },
                Task {
                    id: EntryId::fresh(),
                    title: "Prep dinner ingredients".to_string(),
                    context: TaskContext::Personal,
                    energy: Energy::Light,
                    due: Some("18:00".to_string()),
                    completed: false,
                },
            ],
            events: vec![
                ScheduleEvent {
                    id: EntryId::fresh(),
                    title: "Stand-up with product".to_string(),
                    time: "09:00".to_string(),
                    location: Some("Zoom".to_string()),
                },
                ScheduleEvent {
                    id: EntryId::fresh(),
                    title: "Deep focus block".to_string(),
                    time: "10:00".to_string(),
                    location: Some("Studio".to_string()),
                },
                ScheduleEvent {
                    id: EntryId::fresh(),
                    title: "Dinner with Sam".to_string(),
                    time: "19:00".to_string(),
                    location: Some("Maison".to_string()),
                },
            ],
            habits: vec![
                Habit {
                    id: EntryId::fresh(),
                    label: "Morning reset".to_string(),
                    completed: true,
                },
                Habit {
                    id: EntryId::fresh(),
                    label: "Movement break".to_string(),
                    completed: false,
                },
                Habit {
                    id: EntryId::fresh(),
                    label: "Digital sunset".to_string(),
                    completed: false,
                },
            ],
        }
    }
}
