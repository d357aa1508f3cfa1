//! Dashboard state container.
//!
//! # Responsibility
//! - Rebuild snapshots from persisted payloads (hydration).
//! - Apply pure snapshot transitions for every user action.
//! - Expose read-only projections computed from the snapshot.
//!
//! # Invariants
//! - Every operation either fully applies or fully no-ops; the store is
//!   never left in an inconsistent state.

pub mod dashboard_store;
pub mod derived;
pub mod hydrate;
pub mod mutations;
