//! End-to-end dashboard flows driven through `handle_event`.

use chrono::{DateTime, Utc};
use tempfile::TempDir;
use travel_authority::app::{Action, AppState, Event, InputMode, Screen, ToastVariant};
use travel_authority::storage::{shared, KeyValueStore, MemoryStore, SharedStore, RECORDS_KEY};
use travel_authority::{handle_event, initialize, initialize_with_store, Config, ThemeMode};

fn at(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_700_000_000_000 + ms).unwrap()
}

fn fixed_clock() -> DateTime<Utc> {
    at(0)
}

fn dashboard(backend: SharedStore) -> AppState {
    let config = Config {
        require_login: false,
        ..Default::default()
    };
    let mut state = initialize_with_store(backend, &config).unwrap();
    state.clock = fixed_clock;
    state
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

/// Opens the form and fills all six fields in order, without submitting.
fn fill_new_record(state: &mut AppState, values: [&str; 6]) {
    send(state, Event::NewRecord);
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            send(state, Event::NextField);
        }
        type_text(state, value);
    }
}

const JANE: [&str; 6] = ["Jane Doe", "Capt", "Manila", "Training", "2024-01-10", "2024-01-15"];

fn last_toast(state: &AppState) -> (String, ToastVariant) {
    let toast = state.notifier.toasts().last().unwrap();
    (toast.message.clone(), toast.variant)
}

#[test]
fn create_edit_delete_round_trip() {
    let backend = shared(MemoryStore::default());
    let mut state = dashboard(backend.clone());

    fill_new_record(&mut state, JANE);
    let (_, actions) = send(&mut state, Event::Confirm);

    assert_eq!(actions, vec![Action::ScheduleTimer { millis: 2500 }]);
    assert_eq!(last_toast(&state), ("Record saved".to_string(), ToastVariant::Success));
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.table.visible_count(), 1);
    assert_eq!(state.table.rows()[0].text(), "Jane Doe Capt Manila Training 2024-01-10 2024-01-15");

    let persisted = backend.borrow().get(RECORDS_KEY).unwrap().unwrap();
    assert!(persisted.contains("Jane Doe"));

    // edit Manila → Cebu
    send(&mut state, Event::EditSelected);
    assert_eq!(state.input_mode, InputMode::Form);
    send(&mut state, Event::NextField);
    send(&mut state, Event::NextField);
    for _ in 0.."Manila".len() {
        send(&mut state, Event::Backspace);
    }
    type_text(&mut state, "Cebu");
    send(&mut state, Event::Confirm);

    assert_eq!(last_toast(&state), ("Record updated".to_string(), ToastVariant::Primary));
    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.records()[0].fields.destination, "Cebu");
    assert_eq!(
        state.table.rows()[0].cells,
        ["Jane Doe", "Capt", "Cebu", "Training", "2024-01-10", "2024-01-15"]
    );
    assert_eq!(state.table.rows()[0].id, state.store.records()[0].id);

    send(&mut state, Event::DeleteSelected);

    assert_eq!(last_toast(&state), ("Record deleted".to_string(), ToastVariant::Danger));
    assert!(state.store.is_empty());
    assert!(state.table.rows().is_empty());
    assert_eq!(backend.borrow().get(RECORDS_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn blank_required_field_blocks_submit() {
    let mut state = dashboard(shared(MemoryStore::default()));

    fill_new_record(&mut state, ["", "Capt", "Manila", "Training", "2024-01-10", "2024-01-15"]);
    let (render, actions) = send(&mut state, Event::Confirm);

    assert!(render);
    assert!(actions.is_empty());
    assert!(state.notifier.toasts().is_empty());
    assert!(state.store.is_empty());
    assert_eq!(state.input_mode, InputMode::Form);
    assert!(state.form.was_validated());

    send(&mut state, Event::Escape);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert!(!state.form.is_open());
}

#[test]
fn search_and_sort_combine() {
    let mut state = dashboard(shared(MemoryStore::default()));
    for name in ["Cal", "Bea", "Dee"] {
        fill_new_record(&mut state, [name, "Capt", "Manila", "Training", "2024-01-10", "2024-01-15"]);
        send(&mut state, Event::Confirm);
    }

    send(&mut state, Event::SortColumn(0));
    let names: Vec<_> = state.table.visible_rows().map(|row| row.cells[0].clone()).collect();
    assert_eq!(names, ["Bea", "Cal", "Dee"]);

    send(&mut state, Event::SearchMode);
    type_text(&mut state, "e");
    assert_eq!(state.table.visible_count(), 2);

    // a new record arrives while filtered and sorted descending
    send(&mut state, Event::Escape);
    send(&mut state, Event::SortColumn(0));
    send(&mut state, Event::SearchMode);
    type_text(&mut state, "e");
    send(&mut state, Event::Confirm);
    fill_new_record(&mut state, ["Eve", "Maj", "Cebu", "Audit", "2024-02-01", "2024-02-03"]);
    send(&mut state, Event::Confirm);

    let names: Vec<_> = state.table.visible_rows().map(|row| row.cells[0].clone()).collect();
    assert_eq!(names, ["Eve", "Dee", "Bea"]);
    assert_eq!(state.table.rows().len(), 4);
}

#[test]
fn login_then_dashboard() {
    let mut state = initialize_with_store(shared(MemoryStore::default()), &Config::default()).unwrap();
    state.clock = fixed_clock;
    assert_eq!(state.screen, Screen::Login);

    type_text(&mut state, "admin");
    send(&mut state, Event::NextField);
    type_text(&mut state, "admin");
    let (_, actions) = send(&mut state, Event::Confirm);

    assert!(actions.contains(&Action::ScheduleTimer { millis: 600 }));
    assert_eq!(state.screen, Screen::Login);

    send(&mut state, Event::Tick { now: at(700) });
    assert_eq!(state.screen, Screen::Dashboard);

    send(&mut state, Event::Tick { now: at(2500) });
    assert!(state.notifier.toasts().is_empty());
}

#[test]
fn configured_credentials_replace_demo_account() {
    let config = Config {
        demo_username: "ops".to_string(),
        demo_password: "secret".to_string(),
        ..Default::default()
    };
    let mut state = initialize_with_store(shared(MemoryStore::default()), &config).unwrap();
    state.clock = fixed_clock;

    type_text(&mut state, "admin");
    send(&mut state, Event::NextField);
    type_text(&mut state, "admin");
    send(&mut state, Event::Confirm);

    assert_eq!(
        last_toast(&state),
        ("Invalid credentials (demo: ops/secret).".to_string(), ToastVariant::Danger)
    );
}

#[test]
fn theme_preference_survives_restart() {
    let backend = shared(MemoryStore::default());
    let mut state = dashboard(backend.clone());
    assert_eq!(state.theme.mode(), ThemeMode::Dark);

    send(&mut state, Event::ToggleTheme);
    assert_eq!(state.theme.mode(), ThemeMode::Light);
    drop(state);

    let restarted = dashboard(backend);
    assert_eq!(restarted.theme.mode(), ThemeMode::Light);
}

#[test]
fn records_persist_in_data_dir() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        require_login: false,
        ..Default::default()
    };

    let mut state = initialize(&config).unwrap();
    fill_new_record(&mut state, JANE);
    send(&mut state, Event::Confirm);
    send(&mut state, Event::ToggleTheme);
    drop(state);

    assert!(dir.path().join("store.json").exists());

    let reopened = initialize(&config).unwrap();
    assert_eq!(reopened.store.len(), 1);
    assert_eq!(reopened.store.records()[0].fields.name, "Jane Doe");
    assert_eq!(reopened.table.visible_count(), 1);
    assert_eq!(reopened.theme.mode(), ThemeMode::Light);
}

#[test]
fn corrupt_store_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("store.json"), "{ not json").unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let state = initialize(&config).unwrap();
    assert!(state.store.is_empty());
    assert_eq!(state.theme.mode(), ThemeMode::Dark);
}

#[test]
fn sidebar_entry_opens_form() {
    let mut state = dashboard(shared(MemoryStore::default()));

    send(&mut state, Event::ToggleSidebar);
    assert_eq!(state.input_mode, InputMode::Sidebar);

    send(&mut state, Event::Confirm);
    assert_eq!(state.input_mode, InputMode::Form);
    assert!(state.form.is_open());
}
