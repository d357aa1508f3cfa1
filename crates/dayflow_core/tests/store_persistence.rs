use dayflow_core::db::open_db_in_memory;
use dayflow_core::{
    DashboardState, DashboardStore, EntryId, EventDraft, MemoryStateRepository, RepoError,
    RepoResult, SqliteStateRepository, StateRepository, TaskDraft,
};

/// Backend whose writes always fail, for exercising the fire-and-forget path.
struct FailingStateRepository;

impl StateRepository for FailingStateRepository {
    fn load(&self) -> RepoResult<Option<String>> {
        Err(RepoError::MissingRequiredTable("kv_store"))
    }

    fn save(&self, _payload: &str) -> RepoResult<()> {
        Err(RepoError::MissingRequiredTable("kv_store"))
    }
}

#[test]
fn hydrate_adopts_a_previously_saved_snapshot() {
    let mut saved = DashboardState::seed();
    saved.focus = "Finish the report".to_string();
    saved.water = 2;
    let payload = serde_json::to_string(&saved).unwrap();

    let mut store = DashboardStore::new(MemoryStateRepository::with_payload(payload));
    let snapshot = store.hydrate().clone();

    assert_eq!(snapshot, saved);
    assert!(store.is_hydrated());
}

#[test]
fn hydrate_runs_once_and_later_calls_are_no_ops() {
    let mut store = DashboardStore::new(MemoryStateRepository::new());
    store.hydrate();
    store.set_focus("changed after hydration");

    let snapshot = store.hydrate().clone();

    assert_eq!(snapshot.focus, "changed after hydration");
}

#[test]
fn no_write_happens_before_hydration_completes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::try_new(&conn).unwrap();
    let mut store = DashboardStore::new(repo);

    store.set_focus("too early");
    // The snapshot updated, but nothing may reach the backend yet: a seed
    // write here could clobber real data from a previous session.
    assert_eq!(store.snapshot().focus, "too early");
    let reader = SqliteStateRepository::try_new(&conn).unwrap();
    assert_eq!(reader.load().unwrap(), None);

    store.hydrate();
    store.set_focus("after hydration");
    let payload = reader.load().unwrap().expect("post-hydration write");
    let persisted: DashboardState = serde_json::from_str(&payload).unwrap();
    assert_eq!(persisted.focus, "after hydration");
}

#[test]
fn every_mutation_after_hydration_persists_the_new_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::try_new(&conn).unwrap();
    let mut store = DashboardStore::new(repo);
    store.hydrate();

    store.set_focus("persist me");
    store.set_water(7);

    let reader = SqliteStateRepository::try_new(&conn).unwrap();
    let payload = reader.load().unwrap().expect("mutations must persist");
    let persisted: DashboardState = serde_json::from_str(&payload).unwrap();
    assert_eq!(persisted.focus, "persist me");
    assert_eq!(persisted.water, 7);
}

#[test]
fn persisted_payload_reflects_the_latest_mutation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::try_new(&conn).unwrap();
    let mut store = DashboardStore::new(repo);
    store.hydrate();

    store.set_note("first");
    store.set_note("second");
    store.set_note("third");

    let reader = SqliteStateRepository::try_new(&conn).unwrap();
    let payload = reader.load().unwrap().expect("mutations must persist");
    let persisted: DashboardState = serde_json::from_str(&payload).unwrap();
    assert_eq!(persisted.note, "third");
}

#[test]
fn failing_backend_never_breaks_the_mutation_path() {
    let mut store = DashboardStore::new(FailingStateRepository);
    store.hydrate();

    let snapshot = store.set_focus("still applied").clone();
    assert_eq!(snapshot.focus, "still applied");

    let draft = TaskDraft {
        title: "Unpersisted but visible".to_string(),
        ..TaskDraft::default()
    };
    let snapshot = store.add_task(&draft).clone();
    assert_eq!(snapshot.tasks[0].title, "Unpersisted but visible");
}

#[test]
fn failing_load_falls_back_to_seed_defaults() {
    let mut store = DashboardStore::new(FailingStateRepository);

    let snapshot = store.hydrate().clone();

    assert_eq!(snapshot.focus, DashboardState::seed().focus);
    assert!(store.is_hydrated());
}

#[test]
fn end_to_end_session_cycle_over_sqlite() {
    let conn = open_db_in_memory().unwrap();

    // First session: hydrate from empty storage, plan the day.
    let repo = SqliteStateRepository::try_new(&conn).unwrap();
    let mut store = DashboardStore::new(repo);
    store.hydrate();
    store.set_focus("Ship the release");
    store.add_event(&EventDraft {
        title: "Release review".to_string(),
        time: "16:00".to_string(),
        location: String::new(),
    });
    let first_session = store.snapshot().clone();
    drop(store);

    // Second session: a fresh store over the same backend sees the data.
    let repo = SqliteStateRepository::try_new(&conn).unwrap();
    let mut store = DashboardStore::new(repo);
    let snapshot = store.hydrate().clone();

    assert_eq!(snapshot, first_session);
    assert_eq!(snapshot.focus, "Ship the release");
    assert_eq!(
        snapshot.events.last().unwrap().title,
        "Release review"
    );
}

#[test]
fn store_mutations_reject_invalid_drafts_without_state_change() {
    let mut store = DashboardStore::new(MemoryStateRepository::new());
    store.hydrate();
    let before = store.snapshot().clone();

    store.add_task(&TaskDraft {
        title: "   ".to_string(),
        ..TaskDraft::default()
    });
    store.add_event(&EventDraft::default());
    store.toggle_task(&EntryId::from("missing"));

    assert_eq!(store.snapshot(), &before);
}
