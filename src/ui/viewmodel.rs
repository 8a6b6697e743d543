//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncated cell text, match
//! highlight ranges, selection flags and overlay contents.

use crate::app::notify::ToastVariant;
use crate::table::SortDirection;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,
    /// Live toasts, oldest first.
    pub toasts: Vec<ToastView>,
    pub body: Body,
}

/// Screen-specific content.
#[derive(Debug, Clone)]
pub enum Body {
    Login(LoginView),
    Dashboard(DashboardView),
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub columns: Vec<ColumnHeader>,
    /// Rows inside the visible window.
    pub display_items: Vec<DisplayItem>,
    /// Index of the selected item within `display_items`.
    pub selected_index: usize,
    pub search_bar: Option<SearchBarInfo>,
    /// Shown instead of rows when nothing is visible.
    pub empty_state: Option<EmptyState>,
    pub overlay: Option<Overlay>,
}

/// Table column header with its computed width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub title: String,
    pub width: usize,
    pub sort: Option<SortDirection>,
}

/// One table row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub cells: Vec<CellView>,
    /// Text of the actions column.
    pub actions: String,
    pub is_selected: bool,
}

/// Cell text already truncated to its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    /// `(start, end)` character ranges matching the search query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Modal content drawn over the table.
#[derive(Debug, Clone)]
pub enum Overlay {
    Form(FormView),
    Sidebar(SidebarView),
    Dialog(DialogView),
}

#[derive(Debug, Clone)]
pub struct FormView {
    pub title: String,
    pub fields: Vec<FieldView>,
    /// Shown under the fields after a blocked submit.
    pub error: Option<String>,
}

/// A labelled input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
    pub invalid: bool,
}

#[derive(Debug, Clone)]
pub struct SidebarView {
    pub entries: Vec<&'static str>,
    pub selected_index: usize,
}

#[derive(Debug, Clone)]
pub struct DialogView {
    pub title: &'static str,
    pub lines: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct LoginView {
    pub fields: Vec<FieldView>,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub variant: ToastVariant,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go to the search bar.
    pub active: bool,
}
