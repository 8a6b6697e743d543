//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the dashboard needs: the
//! record store, the rendered table with its search/sort filter, the shared
//! record form, the login form, and the notification and theme services. The
//! event handler mutates it; the renderer reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # Table Sync
//!
//! The table is never patched. After every store mutation
//! [`AppState::refresh_table`] re-renders all rows from the store and re-applies
//! the current query and sort on top of them.

use super::form::{FormField, FormMediator, FormMode};
use super::login::{Credentials, LoginField, LoginForm};
use super::modes::{InputMode, Screen};
use super::notify::{Notifier, ToastVariant};
use super::sidebar::SidebarItem;
use super::Action;
use crate::domain::RecordId;
use crate::storage::RecordStore;
use crate::table::{RecordTable, RenderedRow, TableFilter, COLUMNS, DATA_COLUMNS};
use crate::ui::helpers::{find_match_ranges, truncate};
use crate::ui::theme::ThemeService;
use crate::ui::viewmodel::{
    Body, CellView, ColumnHeader, DashboardView, DialogView, DisplayItem, EmptyState, FieldView, FooterInfo,
    FormView, HeaderInfo, LoginView, Overlay, SearchBarInfo, SidebarView, ToastView, UIViewModel,
};
use chrono::{DateTime, Duration, Utc};

/// Source of the current time. Swapped for a fixed clock in tests.
pub type Clock = fn() -> DateTime<Utc>;

/// Delay between a successful login and showing the dashboard.
pub const NAVIGATION_DELAY_MS: i64 = 600;

/// Width of the actions column, including its leading gap.
const ACTIONS_WIDTH: usize = 17;

/// Narrowest a data column is allowed to get.
const MIN_COLUMN_WIDTH: usize = 6;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Login form or dashboard.
    pub screen: Screen,

    /// Active keybinding set on the dashboard.
    pub input_mode: InputMode,

    /// Authoritative record collection.
    pub store: RecordStore,

    /// Rows rendered from `store`.
    pub table: RecordTable,

    /// Query and sort state applied to `table`.
    pub filter: TableFilter,

    /// Text typed into the search bar.
    pub search_query: String,

    /// Zero-based index of the selected row among visible rows.
    pub selected_index: usize,

    /// Shared create/edit form.
    pub form: FormMediator,

    pub login: LoginForm,

    /// Demo credentials accepted by the login form.
    pub credentials: Credentials,

    pub notifier: Notifier,

    pub theme: ThemeService,

    /// Highlighted sidebar entry.
    pub sidebar_index: usize,

    /// When the post-login switch to the dashboard happens.
    pub pending_navigation: Option<DateTime<Utc>>,

    pub clock: Clock,
}

impl AppState {
    /// Creates state on the login screen with the default demo credentials and
    /// the table rendered from `store`.
    #[must_use]
    pub fn new(store: RecordStore, theme: ThemeService) -> Self {
        let mut state = Self {
            screen: Screen::Login,
            input_mode: InputMode::Normal,
            store,
            table: RecordTable::default(),
            filter: TableFilter::default(),
            search_query: String::new(),
            selected_index: 0,
            form: FormMediator::default(),
            login: LoginForm::default(),
            credentials: Credentials::default(),
            notifier: Notifier::default(),
            theme,
            sidebar_index: 0,
            pending_navigation: None,
            clock: Utc::now,
        };
        state.refresh_table();
        state
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Starts directly on the dashboard.
    #[must_use]
    pub fn skip_login(mut self) -> Self {
        self.screen = Screen::Dashboard;
        self
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Re-renders the table from the store and re-applies query and sort.
    pub fn refresh_table(&mut self) {
        let _span = tracing::debug_span!("refresh_table", record_count = self.store.len()).entered();

        self.table.render(self.store.records());
        self.filter.reapply(&mut self.table);
        self.clamp_selection();
    }

    /// Filters the table by `search_query`.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!("apply_search_filter", query_len = self.search_query.len()).entered();

        self.filter.apply_filter(&mut self.table, &self.search_query);
        self.clamp_selection();

        tracing::debug!(visible = self.table.visible_count(), "search filter applied");
    }

    /// Sorts the table by `column`. Returns `false` if the column is not sortable.
    pub fn sort_by_column(&mut self, column: usize) -> bool {
        let sorted = self.filter.sort_by_column(&mut self.table, column);
        if sorted {
            self.clamp_selection();
        }
        sorted
    }

    fn clamp_selection(&mut self) {
        let visible = self.table.visible_count();
        self.selected_index = if visible == 0 { 0 } else { self.selected_index.min(visible - 1) };
    }

    /// Moves selection down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let visible = self.table.visible_count();
        if visible == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % visible;
    }

    /// Moves selection up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let visible = self.table.visible_count();
        if visible == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 { visible - 1 } else { self.selected_index - 1 };
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&RenderedRow> {
        self.table.visible_rows().nth(self.selected_index)
    }

    /// Identifier carried by the selected row.
    #[must_use]
    pub fn selected_record_id(&self) -> Option<RecordId> {
        self.selected_row().map(|row| row.id.clone())
    }

    /// Shows a toast and returns the timer action that will expire it.
    pub fn notify(&mut self, message: &str, variant: ToastVariant) -> Action {
        let now = self.now();
        Action::timer(self.notifier.notify(message, variant, now))
    }

    /// Arms the post-login navigation and returns its timer action.
    pub fn schedule_navigation(&mut self) -> Action {
        let delay = Duration::milliseconds(NAVIGATION_DELAY_MS);
        self.pending_navigation = Some(self.now() + delay);
        Action::timer(delay)
    }

    /// Computes the view model for a `rows` × `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let toasts = self
            .notifier
            .toasts()
            .iter()
            .map(|toast| ToastView {
                message: toast.message.clone(),
                variant: toast.variant,
            })
            .collect();

        let body = match self.screen {
            Screen::Login => Body::Login(self.compute_login()),
            Screen::Dashboard => Body::Dashboard(self.compute_dashboard(rows, cols)),
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            toasts,
            body,
        }
    }

    fn compute_login(&self) -> LoginView {
        let view = |label, field, value: String| FieldView {
            label,
            value,
            focused: self.login.focus() == field,
            invalid: self.login.is_invalid(field),
        };

        LoginView {
            fields: vec![
                view("Username", LoginField::Username, self.login.username().to_string()),
                view("Password", LoginField::Password, "•".repeat(self.login.password().chars().count())),
            ],
            hint: format!("Demo account: {} / {}", self.credentials.username, self.credentials.password),
        }
    }

    fn compute_dashboard(&self, rows: usize, cols: usize) -> DashboardView {
        let widths = Self::column_widths(cols);
        let sort = self.filter.sort();

        let columns = COLUMNS
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnHeader {
                title: column.title.to_string(),
                width: widths[index],
                sort: sort.filter(|s| s.column == index).map(|s| s.direction),
            })
            .collect();

        let search_bar = (self.input_mode == InputMode::Search || !self.search_query.is_empty()).then(|| SearchBarInfo {
            query: self.search_query.clone(),
            active: self.input_mode == InputMode::Search,
        });

        let visible: Vec<&RenderedRow> = self.table.visible_rows().collect();

        let empty_state = if self.store.is_empty() {
            Some(EmptyState {
                message: "No travel authorities yet".to_string(),
                subtitle: "Press 'n' to create one".to_string(),
            })
        } else if visible.is_empty() {
            Some(EmptyState {
                message: "No matching records".to_string(),
                subtitle: "Esc clears the search".to_string(),
            })
        } else {
            None
        };

        let available_rows = self.calculate_available_rows(rows, search_bar.is_some());

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible.len());
        if visible_end - visible_start < available_rows && visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, row)| self.compute_display_item(row, visible_start + offset, &widths))
            .collect();

        DashboardView {
            columns,
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            search_bar,
            empty_state,
            overlay: self.compute_overlay(),
        }
    }

    fn compute_display_item(&self, row: &RenderedRow, absolute_idx: usize, widths: &[usize]) -> DisplayItem {
        let cells = row
            .cells
            .iter()
            .zip(widths)
            .map(|(text, &width)| {
                let text = truncate(text, width.saturating_sub(1));
                let highlight_ranges = find_match_ranges(&text, &self.search_query);
                CellView { text, highlight_ranges }
            })
            .collect();

        let actions = row.actions.iter().map(|action| action.label()).collect::<Vec<_>>().join(" ");

        DisplayItem {
            cells,
            actions,
            is_selected: absolute_idx == self.selected_index,
        }
    }

    fn compute_overlay(&self) -> Option<Overlay> {
        match self.input_mode {
            InputMode::Form => Some(Overlay::Form(self.compute_form())),
            InputMode::Sidebar => Some(Overlay::Sidebar(SidebarView {
                entries: SidebarItem::ALL.iter().map(|item| item.label()).collect(),
                selected_index: self.sidebar_index,
            })),
            InputMode::Dialog(dialog) => Some(Overlay::Dialog(DialogView {
                title: dialog.title(),
                lines: dialog.body().to_vec(),
            })),
            InputMode::Normal | InputMode::Search => None,
        }
    }

    fn compute_form(&self) -> FormView {
        let title = match self.form.mode() {
            FormMode::Editing(_) => "Edit Travel Authority",
            FormMode::Creating | FormMode::Idle => "New Travel Authority",
        };

        let fields = FormField::ALL
            .iter()
            .map(|&field| FieldView {
                label: field.label(),
                value: field.value(self.form.fields()).to_string(),
                focused: self.form.focus() == field,
                invalid: self.form.is_invalid(field),
            })
            .collect::<Vec<_>>();

        let error = fields
            .iter()
            .any(|field| field.invalid)
            .then(|| "Please fill in all required fields.".to_string());

        FormView {
            title: title.to_string(),
            fields,
            error,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.screen {
            Screen::Login => " Travel Authority · Sign in ".to_string(),
            Screen::Dashboard => format!(
                " Travel Authority ({}/{}) ",
                self.table.visible_count(),
                self.store.len()
            ),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.screen, self.input_mode) {
            (Screen::Login, _) => "Tab: next field  Enter: sign in  Esc: close",
            (Screen::Dashboard, InputMode::Normal) => {
                "j/k: navigate  /: search  n: new  e/Enter: edit  d: delete  1-6: sort  b: menu  t: theme  q: quit"
            }
            (Screen::Dashboard, InputMode::Search) => "Type to filter  Enter: done  Esc: clear  Ctrl+n/p: navigate",
            (Screen::Dashboard, InputMode::Form) => "Tab/Shift+Tab: field  Enter: save  Esc: cancel",
            (Screen::Dashboard, InputMode::Sidebar) => "j/k: navigate  Enter: open  Esc/b: close  t: theme",
            (Screen::Dashboard, InputMode::Dialog(_)) => "Esc/Enter: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for table rows after header, borders, column titles, footer
    /// and the optional 3-line search bar.
    const fn calculate_available_rows(&self, total_rows: usize, with_search: bool) -> usize {
        if with_search {
            total_rows.saturating_sub(9)
        } else {
            total_rows.saturating_sub(6)
        }
    }

    /// Splits `cols` evenly across the data columns after the actions column.
    fn column_widths(cols: usize) -> [usize; DATA_COLUMNS + 1] {
        let data_width = (cols.saturating_sub(ACTIONS_WIDTH) / DATA_COLUMNS).max(MIN_COLUMN_WIDTH);
        let mut widths = [data_width; DATA_COLUMNS + 1];
        widths[DATA_COLUMNS] = ACTIONS_WIDTH;
        widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordFields, TravelRecord};
    use crate::table::RowAction;
    use crate::ui::theme::ThemeMode;

    fn state_with(names: &[&str]) -> AppState {
        let mut store = RecordStore::transient();
        for name in names {
            store.upsert(TravelRecord::create(RecordFields {
                name: (*name).to_string(),
                rank: "Capt".to_string(),
                destination: "Manila".to_string(),
                purpose: "Training".to_string(),
                departure: "2024-01-10".to_string(),
                return_date: "2024-01-15".to_string(),
            }));
        }
        let theme = ThemeService::load(None, ThemeMode::Dark).unwrap();
        AppState::new(store, theme).skip_login()
    }

    #[test]
    fn new_state_renders_store() {
        let state = state_with(&["A", "B"]);
        assert_eq!(state.table.rows().len(), 2);
        assert_eq!(state.selected_row().unwrap().cells[0], "A");
    }

    #[test]
    fn selection_wraps_over_visible_rows() {
        let mut state = state_with(&["Bea", "Cal", "Dee"]);
        state.search_query = "e".to_string();
        state.apply_search_filter();

        assert_eq!(state.table.visible_count(), 2);
        state.move_selection_up();
        assert_eq!(state.selected_row().unwrap().cells[0], "Dee");
        state.move_selection_down();
        assert_eq!(state.selected_row().unwrap().cells[0], "Bea");
    }

    #[test]
    fn selection_clamps_when_filter_shrinks() {
        let mut state = state_with(&["Ana", "Ben", "Cora"]);
        state.selected_index = 2;
        state.search_query = "ben".to_string();
        state.apply_search_filter();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_row().unwrap().cells[0], "Ben");
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let names: Vec<String> = (0..30).map(|i| format!("P{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);
        state.selected_index = 20;

        let vm = state.compute_viewmodel(16, 120);
        let Body::Dashboard(dashboard) = vm.body else {
            panic!("expected dashboard");
        };

        assert_eq!(dashboard.display_items.len(), 10);
        let selected = &dashboard.display_items[dashboard.selected_index];
        assert!(selected.is_selected);
        assert_eq!(selected.cells[0].text, "P20");
        assert_eq!(dashboard.columns.len(), COLUMNS.len());
        assert_eq!(selected.actions, "[edit] [delete]");
        assert_eq!(selected.actions, format!("{} {}", RowAction::Edit.label(), RowAction::Delete.label()));
    }

    #[test]
    fn viewmodel_marks_sorted_column_and_matches() {
        let mut state = state_with(&["Ana", "Ben"]);
        state.sort_by_column(0);
        state.search_query = "an".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel(24, 120);
        let Body::Dashboard(dashboard) = vm.body else {
            panic!("expected dashboard");
        };

        assert!(dashboard.columns[0].sort.is_some());
        assert!(dashboard.columns[1].sort.is_none());
        assert_eq!(dashboard.display_items[0].cells[0].highlight_ranges, vec![(0, 2)]);
        assert!(dashboard.search_bar.is_some());
    }

    #[test]
    fn empty_store_shows_empty_state() {
        let state = state_with(&[]);
        let Body::Dashboard(dashboard) = state.compute_viewmodel(24, 80).body else {
            panic!("expected dashboard");
        };
        assert!(dashboard.empty_state.is_some());
        assert!(dashboard.display_items.is_empty());
    }

    #[test]
    fn narrow_panes_keep_minimum_column_width() {
        let widths = AppState::column_widths(20);
        assert!(widths[..DATA_COLUMNS].iter().all(|&w| w == MIN_COLUMN_WIDTH));
        assert_eq!(widths[DATA_COLUMNS], ACTIONS_WIDTH);
    }
}
