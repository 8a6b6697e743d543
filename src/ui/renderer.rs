//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from state, then hand it
//! to the component renderers with the active palette.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders the plugin UI to stdout for a `rows` × `cols` pane.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, state.theme.active(), rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        Body::Login(login) => components::render_login_screen(vm, login, theme, cols, rows),
        Body::Dashboard(dashboard) => components::render_dashboard(vm, dashboard, theme, cols, rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, InputMode};
    use crate::domain::{RecordFields, TravelRecord};
    use crate::storage::RecordStore;
    use crate::ui::theme::{ThemeMode, ThemeService};

    fn state() -> AppState {
        let mut store = RecordStore::transient();
        store.upsert(TravelRecord::create(RecordFields {
            name: "Jane Doe".to_string(),
            rank: "Capt".to_string(),
            destination: "Manila".to_string(),
            purpose: "Training".to_string(),
            departure: "2024-01-10".to_string(),
            return_date: "2024-01-15".to_string(),
        }));
        AppState::new(store, ThemeService::load(None, ThemeMode::Light).unwrap())
    }

    #[test]
    fn every_screen_renders_in_tiny_and_normal_panes() {
        let mut state = state();
        let events = [
            None,
            Some(Event::Confirm),
            Some(Event::NewRecord),
            Some(Event::Escape),
            Some(Event::ToggleSidebar),
            Some(Event::KeyDown),
            Some(Event::Confirm),
        ];

        for (step, event) in events.into_iter().enumerate() {
            if step == 2 {
                state = state.skip_login();
            }
            if let Some(event) = event {
                handle_event(&mut state, &event).unwrap();
            }
            for (rows, cols) in [(24, 80), (3, 10), (0, 0)] {
                render(&state, rows, cols);
            }
        }
        assert!(matches!(state.input_mode, InputMode::Dialog(_)));
    }
}
