//! Domain model for the daily planning dashboard.
//!
//! # Responsibility
//! - Define the root `DashboardState` aggregate and its element records.
//! - Define the transient draft shapes submitted by the presentation layer.
//!
//! # Invariants
//! - Every element id is unique within its collection for the session.
//! - Collections in the live state are never absent; hydration substitutes
//!   seed defaults per field.

pub mod dashboard;
pub mod draft;
