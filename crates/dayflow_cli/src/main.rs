//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dayflow_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use dayflow_core::{DashboardStore, MemoryStateRepository};

fn main() {
    let mut store = DashboardStore::new(MemoryStateRepository::new());
    let snapshot = store.hydrate();
    println!("dayflow_core version={}", dayflow_core::core_version());
    println!(
        "dayflow_core seed tasks={} events={} habits={}",
        snapshot.tasks.len(),
        snapshot.events.len(),
        snapshot.habits.len()
    );
}
