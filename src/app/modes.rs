//! Screen and input mode state types.
//!
//! The plugin shows one of two screens. On the dashboard, the input mode decides
//! which keybindings are active and which overlay is drawn over the table:
//!
//! - **Normal**: navigate rows, trigger row actions, sort, open overlays
//! - **Search**: type into the search bar
//! - **Form**: type into the shared record form
//! - **Sidebar**: pick a navigation entry
//! - **Dialog**: read an informational dialog

use super::sidebar::InfoDialog;

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Demo login form. Navigates to the dashboard on success.
    Login,
    /// Records table with its overlays.
    Dashboard,
}

/// Current input handling mode on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    Form,
    Sidebar,
    Dialog(InfoDialog),
}
