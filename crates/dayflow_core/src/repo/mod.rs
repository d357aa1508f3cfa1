//! Persistence layer abstractions and backends.
//!
//! # Responsibility
//! - Define the key-value contract the store persists snapshots through.
//! - Isolate SQLite details from the state container.
//!
//! # Invariants
//! - Backends store the whole serialized snapshot under one fixed key.
//! - Repository APIs return semantic errors in addition to DB transport
//!   errors.

pub mod state_repo;
