//! Event handling and state transition logic.
//!
//! [`handle_event`] is the one entry point through which input reaches the
//! application. It mutates [`AppState`] and returns whether a re-render is
//! needed plus the side effects the plugin runtime must perform.
//!
//! # Dispatch
//!
//! A few events apply everywhere (`Tick`, `CloseFocus`, `ToggleTheme`). Everything
//! else is routed by screen and, on the dashboard, by [`InputMode`]:
//!
//! | Mode      | Handles                                                        |
//! |-----------|----------------------------------------------------------------|
//! | Login     | typing, field focus, sign in                                   |
//! | Normal    | navigation, search, new/edit/delete, sort, sidebar             |
//! | Search    | typing into the query, navigation                              |
//! | Form      | typing, field focus, submit, cancel                            |
//! | Sidebar   | navigation, open entry                                         |
//! | Dialog    | close                                                          |

use super::form::SubmitOutcome;
use super::login::LoginOutcome;
use super::modes::{InputMode, Screen};
use super::notify::ToastVariant;
use super::sidebar::SidebarItem;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use chrono::{DateTime, Utc};

/// Input and timer events delivered by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection (row or sidebar entry) down, wrapping.
    KeyDown,
    /// Moves the selection up, wrapping.
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Types a character into whatever has focus.
    Char(char),
    /// Deletes the last character of whatever has focus.
    Backspace,
    /// Cancels the current mode.
    Escape,
    /// Submits the focused form, opens the focused entry, or edits the
    /// selected row.
    Confirm,
    /// Moves focus to the next form field.
    NextField,
    /// Moves focus to the previous form field.
    PrevField,
    /// Focuses the search bar.
    SearchMode,
    /// Opens the form for a new record.
    NewRecord,
    /// Opens the form on the selected row's record.
    EditSelected,
    /// Deletes the selected row's record.
    DeleteSelected,
    /// Sorts by the given zero-based column.
    SortColumn(usize),
    /// Switches between dark and light mode.
    ToggleTheme,
    /// Opens or closes the sidebar.
    ToggleSidebar,
    /// A scheduled timer fired.
    Tick {
        now: DateTime<Utc>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI should re-render.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that touch
/// fallible resources.
///
/// # Examples
///
/// ```
/// use travel_authority::app::{handle_event, AppState, Event};
/// use travel_authority::storage::RecordStore;
/// use travel_authority::ui::theme::{ThemeMode, ThemeService};
///
/// let theme = ThemeService::load(None, ThemeMode::Dark)?;
/// let mut state = AppState::new(RecordStore::transient(), theme).skip_login();
///
/// let (should_render, actions) = handle_event(&mut state, &Event::NewRecord)?;
/// assert!(should_render);
/// assert!(actions.is_empty());
/// assert!(state.form.is_open());
/// # Ok::<(), travel_authority::TravelAuthorityError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, screen = ?state.screen, mode = ?state.input_mode).entered();

    let outcome = match event {
        Event::Tick { now } => handle_tick(state, *now),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::ToggleTheme => {
            state.theme.toggle();
            (true, vec![])
        }
        _ => match (state.screen, state.input_mode) {
            (Screen::Login, _) => handle_login(state, event),
            (Screen::Dashboard, InputMode::Normal) => handle_normal(state, event),
            (Screen::Dashboard, InputMode::Search) => handle_search(state, event),
            (Screen::Dashboard, InputMode::Form) => handle_form(state, event),
            (Screen::Dashboard, InputMode::Sidebar) => handle_sidebar(state, event),
            (Screen::Dashboard, InputMode::Dialog(_)) => handle_dialog(state, event),
        },
    };

    Ok(outcome)
}

/// Expires toasts and performs the pending post-login navigation.
fn handle_tick(state: &mut AppState, now: DateTime<Utc>) -> (bool, Vec<Action>) {
    let expired = state.notifier.expire(now);

    let navigated = match state.pending_navigation {
        Some(deadline) if deadline <= now => {
            tracing::info!("navigating to dashboard");
            state.pending_navigation = None;
            state.screen = Screen::Dashboard;
            state.input_mode = InputMode::Normal;
            true
        }
        _ => false,
    };

    // A tick that changed nothing fired early; re-arm for the nearest deadline.
    let mut actions = vec![];
    if !expired && !navigated {
        let next = [state.notifier.next_deadline(), state.pending_navigation]
            .into_iter()
            .flatten()
            .min();
        if let Some(deadline) = next {
            tracing::trace!(%deadline, "early tick, re-arming timer");
            actions.push(Action::timer(deadline - now));
        }
    }

    (expired || navigated, actions)
}

fn handle_login(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Char(c) => {
            state.login.push_char(*c);
            (true, vec![])
        }
        Event::Backspace => {
            state.login.pop_char();
            (true, vec![])
        }
        Event::NextField | Event::PrevField | Event::KeyDown | Event::KeyUp => {
            state.login.toggle_focus();
            (true, vec![])
        }
        Event::Confirm => {
            if state.pending_navigation.is_some() {
                tracing::debug!("login already accepted, waiting for navigation");
                return (false, vec![]);
            }

            match state.login.submit(&state.credentials) {
                LoginOutcome::Incomplete => (true, vec![]),
                LoginOutcome::Rejected => {
                    let message = format!(
                        "Invalid credentials (demo: {}/{}).",
                        state.credentials.username, state.credentials.password
                    );
                    let toast = state.notify(&message, ToastVariant::Danger);
                    (true, vec![toast])
                }
                LoginOutcome::Accepted => {
                    let toast = state.notify("Signed in. Redirecting…", ToastVariant::Success);
                    let navigation = state.schedule_navigation();
                    (true, vec![toast, navigation])
                }
            }
        }
        Event::Escape => (false, vec![Action::CloseFocus]),
        _ => (false, vec![]),
    }
}

fn handle_normal(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::Escape => {
            if state.search_query.is_empty() {
                return (false, vec![]);
            }
            state.search_query.clear();
            state.apply_search_filter();
            (true, vec![])
        }
        Event::NewRecord => {
            open_new_record_form(state);
            (true, vec![])
        }
        Event::EditSelected | Event::Confirm => edit_selected(state),
        Event::DeleteSelected => delete_selected(state),
        Event::SortColumn(column) => (state.sort_by_column(*column), vec![]),
        Event::ToggleSidebar => {
            state.sidebar_index = 0;
            state.input_mode = InputMode::Sidebar;
            (true, vec![])
        }
        _ => (false, vec![]),
    }
}

fn handle_search(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Char(c) => {
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "search query updated");
            state.apply_search_filter();
            (true, vec![])
        }
        Event::Backspace => {
            state.search_query.pop();
            state.apply_search_filter();
            (true, vec![])
        }
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::Confirm => {
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Escape => {
            tracing::debug!(query = %state.search_query, "clearing search");
            state.search_query.clear();
            state.apply_search_filter();
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        _ => (false, vec![]),
    }
}

fn handle_form(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Char(c) => state.form.push_char(*c),
        Event::Backspace => state.form.pop_char(),
        Event::NextField | Event::KeyDown => state.form.focus_next(),
        Event::PrevField | Event::KeyUp => state.form.focus_prev(),
        Event::Escape => {
            state.form.cancel();
            state.input_mode = InputMode::Normal;
        }
        Event::Confirm => return submit_form(state),
        _ => return (false, vec![]),
    }
    (true, vec![])
}

fn handle_sidebar(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let entries = SidebarItem::ALL.len();
    match event {
        Event::KeyDown => state.sidebar_index = (state.sidebar_index + 1) % entries,
        Event::KeyUp => state.sidebar_index = (state.sidebar_index + entries - 1) % entries,
        Event::Escape | Event::ToggleSidebar => state.input_mode = InputMode::Normal,
        Event::Confirm => {
            let item = SidebarItem::ALL[state.sidebar_index % entries];
            tracing::debug!(item = ?item, "sidebar entry opened");
            match item.dialog() {
                Some(dialog) => state.input_mode = InputMode::Dialog(dialog),
                None => open_new_record_form(state),
            }
        }
        _ => return (false, vec![]),
    }
    (true, vec![])
}

fn handle_dialog(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Escape | Event::Confirm => {
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        _ => (false, vec![]),
    }
}

fn open_new_record_form(state: &mut AppState) {
    state.form.begin_create();
    state.input_mode = InputMode::Form;
}

fn edit_selected(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(id) = state.selected_record_id() else {
        tracing::debug!("no row selected to edit");
        return (false, vec![]);
    };

    let Some(record) = state.store.get(&id).cloned() else {
        tracing::debug!(record_id = %id, "selected row has no backing record, ignoring edit");
        return (false, vec![]);
    };

    state.form.begin_edit(&record);
    state.input_mode = InputMode::Form;
    (true, vec![])
}

fn delete_selected(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(id) = state.selected_record_id() else {
        tracing::debug!("no row selected to delete");
        return (false, vec![]);
    };

    if !state.store.remove(&id) {
        tracing::debug!(record_id = %id, "selected row has no backing record, ignoring delete");
        state.refresh_table();
        return (true, vec![]);
    }

    state.refresh_table();
    let toast = state.notify("Record deleted", ToastVariant::Danger);
    (true, vec![toast])
}

fn submit_form(state: &mut AppState) -> (bool, Vec<Action>) {
    let outcome = state.form.submit(&mut state.store);

    let toast = match outcome {
        SubmitOutcome::Invalid(_) => return (true, vec![]),
        SubmitOutcome::Created(_) => Some(("Record saved", ToastVariant::Success)),
        SubmitOutcome::Updated(_) => Some(("Record updated", ToastVariant::Primary)),
        SubmitOutcome::TargetMissing(_) | SubmitOutcome::NotOpen => None,
    };

    state.input_mode = InputMode::Normal;
    state.refresh_table();

    let actions = toast
        .map(|(message, variant)| state.notify(message, variant))
        .into_iter()
        .collect();
    (true, actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordFields, TravelRecord};
    use crate::storage::RecordStore;
    use crate::ui::theme::{ThemeMode, ThemeService};

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_700_000_000_000 + ms).unwrap()
    }

    fn fixed_clock() -> DateTime<Utc> {
        at(0)
    }

    fn state(records: &[&str]) -> AppState {
        let mut store = RecordStore::transient();
        for name in records {
            store.upsert(TravelRecord::create(RecordFields {
                name: (*name).to_string(),
                rank: "Capt".to_string(),
                destination: "Manila".to_string(),
                purpose: "Training".to_string(),
                departure: "2024-01-10".to_string(),
                return_date: "2024-01-15".to_string(),
            }));
        }
        let mut state = AppState::new(store, ThemeService::load(None, ThemeMode::Dark).unwrap());
        state.clock = fixed_clock;
        state
    }

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|event| handle_event(state, event).unwrap().1)
            .collect()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn login_success_navigates_after_delay() {
        let mut state = state(&[]);
        type_text(&mut state, "admin");
        handle_event(&mut state, &Event::NextField).unwrap();
        type_text(&mut state, "admin");

        let actions = send(&mut state, &[Event::Confirm]);

        assert_eq!(
            actions,
            vec![Action::ScheduleTimer { millis: 2500 }, Action::ScheduleTimer { millis: 600 }]
        );
        assert_eq!(state.notifier.toasts()[0].message, "Signed in. Redirecting…");
        assert_eq!(state.screen, Screen::Login);

        let (render, _) = handle_event(&mut state, &Event::Tick { now: at(600) }).unwrap();
        assert!(render);
        assert_eq!(state.screen, Screen::Dashboard);
        assert_eq!(state.notifier.toasts().len(), 1);
    }

    #[test]
    fn login_failure_shows_danger_toast() {
        let mut state = state(&[]);
        type_text(&mut state, "root");
        handle_event(&mut state, &Event::NextField).unwrap();
        type_text(&mut state, "toor");
        send(&mut state, &[Event::Confirm]);

        let toast = &state.notifier.toasts()[0];
        assert_eq!(toast.message, "Invalid credentials (demo: admin/admin).");
        assert_eq!(toast.variant, ToastVariant::Danger);
        assert_eq!(state.pending_navigation, None);
    }

    #[test]
    fn blank_login_only_flags_form() {
        let mut state = state(&[]);
        let actions = send(&mut state, &[Event::Confirm]);

        assert!(actions.is_empty());
        assert!(state.notifier.toasts().is_empty());
        assert!(state.login.was_validated());
    }

    #[test]
    fn early_tick_rearms_timer() {
        let mut state = state(&[]).skip_login();
        state.notify("Record saved", ToastVariant::Success);

        let (render, actions) = handle_event(&mut state, &Event::Tick { now: at(2400) }).unwrap();

        assert!(!render);
        assert_eq!(actions, vec![Action::ScheduleTimer { millis: 100 }]);
        let (render, actions) = handle_event(&mut state, &Event::Tick { now: at(2500) }).unwrap();
        assert!(render);
        assert!(actions.is_empty());
    }

    #[test]
    fn sort_on_actions_column_is_ignored() {
        let mut state = state(&["B", "A"]).skip_login();
        let (render, _) = handle_event(&mut state, &Event::SortColumn(6)).unwrap();
        assert!(!render);
        assert_eq!(state.filter.sort(), None);

        handle_event(&mut state, &Event::SortColumn(0)).unwrap();
        assert_eq!(state.table.rows()[0].cells[0], "A");
    }

    #[test]
    fn sort_survives_rerender_after_mutation() {
        let mut state = state(&["B", "A", "C"]).skip_login();
        send(&mut state, &[Event::SortColumn(0), Event::SortColumn(0)]);
        assert_eq!(state.table.rows()[0].cells[0], "C");

        state.selected_index = 2;
        send(&mut state, &[Event::DeleteSelected]);

        let names: Vec<_> = state.table.rows().iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
    }

    #[test]
    fn sidebar_opens_dialogs_and_form() {
        let mut state = state(&[]).skip_login();
        send(&mut state, &[Event::ToggleSidebar, Event::KeyDown, Event::Confirm]);
        assert!(matches!(state.input_mode, InputMode::Dialog(_)));

        send(&mut state, &[Event::Escape, Event::ToggleSidebar, Event::Confirm]);
        assert_eq!(state.input_mode, InputMode::Form);
        assert!(state.form.is_open());
    }

    #[test]
    fn search_mode_filters_and_escape_clears() {
        let mut state = state(&["Bea", "Dee", "Cal"]).skip_login();
        send(&mut state, &[Event::SearchMode, Event::Char('e'), Event::Char('e')]);
        assert_eq!(state.table.visible_count(), 1);

        send(&mut state, &[Event::Escape]);
        assert_eq!(state.table.visible_count(), 3);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn theme_toggle_works_from_any_screen() {
        let mut state = state(&[]);
        send(&mut state, &[Event::ToggleTheme]);
        assert_eq!(state.theme.mode(), ThemeMode::Light);
    }
}
