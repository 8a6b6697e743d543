//! Zellij plugin shim.
//!
//! Translates Zellij key and timer events into library [`Event`]s, feeds them
//! to [`handle_event`], and executes the returned [`Action`]s through the
//! plugin host API. All state lives in the library crate.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;

use travel_authority::app::AppState;
use travel_authority::{handle_event, Action, Config, Event, InputMode, Screen};
use zellij_tile::prelude::*;

register_plugin!(State);

#[derive(Default)]
struct State {
    /// `None` until `load` runs, or if initialization failed.
    app: Option<AppState>,
    load_error: Option<String>,
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        travel_authority::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(data_dir = %config.data_dir.display(), require_login = config.require_login, "parsed configuration");

        match travel_authority::initialize(&config) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                tracing::error!(error = %e, "plugin failed to initialize");
                self.load_error = Some(e.to_string());
            }
        }

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[EventType::Key, EventType::Timer, EventType::PermissionRequestResult]);
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let Some(app) = self.app.as_mut() else {
            return false;
        };

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match map_key_event(app, key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick {
                now: chrono::Utc::now(),
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                tracing::debug!(?status, "permission request answered");
                return false;
            }
            _ => return false,
        };

        let _guard = tracing::debug_span!("plugin_update", event = ?our_event).entered();

        match handle_event(app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        match (&self.app, &self.load_error) {
            (Some(app), _) => travel_authority::ui::render(app, rows, cols),
            (None, Some(error)) => println!("Travel Authority failed to start: {error}"),
            (None, None) => {}
        }
    }
}

fn execute_action(action: Action) {
    match action {
        Action::CloseFocus => hide_self(),
        Action::ScheduleTimer { .. } => {
            if let Some(secs) = action.timer_seconds() {
                set_timeout(secs);
            }
        }
    }
}

/// Maps a key press to an application event for the current screen and mode.
///
/// Text-entry modes (login, search, form) send printable keys through as
/// [`Event::Char`], so letter shortcuts only apply in the table and sidebar.
fn map_key_event(app: &AppState, key: &KeyWithModifier) -> Option<Event> {
    tracing::trace!(bare_key = ?key.bare_key, "key event");

    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::KeyDown),
            BareKey::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    if key.bare_key == BareKey::Tab {
        return Some(if key.has_modifiers(&[KeyModifier::Shift]) {
            Event::PrevField
        } else {
            Event::NextField
        });
    }

    let text_entry = app.screen == Screen::Login
        || matches!(app.input_mode, InputMode::Search | InputMode::Form);

    Some(match key.bare_key {
        BareKey::Enter => Event::Confirm,
        BareKey::Esc => Event::Escape,
        BareKey::Backspace => Event::Backspace,
        BareKey::Down => Event::KeyDown,
        BareKey::Up => Event::KeyUp,
        BareKey::Char(c) if text_entry => Event::Char(c),
        BareKey::Char(c) => return map_command_key(app.input_mode, c),
        _ => return None,
    })
}

fn map_command_key(mode: InputMode, c: char) -> Option<Event> {
    Some(match (mode, c) {
        (_, 't') => Event::ToggleTheme,
        (InputMode::Normal | InputMode::Sidebar, 'j') => Event::KeyDown,
        (InputMode::Normal | InputMode::Sidebar, 'k') => Event::KeyUp,
        (InputMode::Normal | InputMode::Sidebar, 'b') => Event::ToggleSidebar,
        (InputMode::Normal, '/') => Event::SearchMode,
        (InputMode::Normal, 'n') => Event::NewRecord,
        (InputMode::Normal, 'e') => Event::EditSelected,
        (InputMode::Normal, 'd') => Event::DeleteSelected,
        (InputMode::Normal, 'q') => Event::CloseFocus,
        (InputMode::Normal, '1'..='6') => {
            let column = c.to_digit(10)? as usize - 1;
            Event::SortColumn(column)
        }
        _ => return None,
    })
}
