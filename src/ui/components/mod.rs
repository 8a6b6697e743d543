//! Composable UI component renderers.
//!
//! Each component positions the cursor itself and returns the next free row
//! where that makes sense. Overlays (form, sidebar, dialog) and toasts are
//! drawn last, on top of the table.

mod dialog;
mod empty;
mod footer;
mod form;
mod header;
mod login;
mod search;
mod sidebar;
mod table;
mod toast;

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DashboardView, LoginView, Overlay, UIViewModel};

use dialog::render_dialog;
use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use login::render_login_box;
use search::render_search_bar;
use sidebar::render_sidebar;
use table::{render_table_headers, render_table_rows};
use toast::render_toasts;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Draws header at the top, footer and its border at the bottom.
fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) -> usize {
    let mut current_row = 2; // row 1 stays blank
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    current_row
}

pub fn render_login_screen(vm: &UIViewModel, login: &LoginView, theme: &Theme, cols: usize, rows: usize) {
    let body_top = render_frame(vm, theme, cols, rows);
    render_login_box(body_top + 1, login, theme, cols);
    render_toasts(&vm.toasts, theme, cols);
}

pub fn render_dashboard(vm: &UIViewModel, dashboard: &DashboardView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_frame(vm, theme, cols, rows);

    if let Some(search) = &dashboard.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_table_headers(current_row, &dashboard.columns, theme);

    match &dashboard.empty_state {
        Some(empty) => render_empty_state(current_row + 1, empty, theme, cols),
        None => {
            render_table_rows(current_row, &dashboard.display_items, &dashboard.columns, theme);
        }
    }

    match &dashboard.overlay {
        Some(Overlay::Form(form)) => render_form(form, theme, cols, rows),
        Some(Overlay::Sidebar(sidebar)) => render_sidebar(sidebar, theme, rows),
        Some(Overlay::Dialog(dialog)) => render_dialog(dialog, theme, cols, rows),
        None => {}
    }

    render_toasts(&vm.toasts, theme, cols);
}

/// Modal frame with a title in the top edge and a blank interior.
///
/// `top`/`left` are 1-indexed; `width` and `height` include the border.
fn render_box(top: usize, left: usize, width: usize, height: usize, title: &str, theme: &Theme) {
    let inner = width.saturating_sub(2);
    let title = truncate(title, inner.saturating_sub(2));
    let border = Theme::fg(&theme.colors.modal_border);

    position_cursor(top, left);
    print!(
        "{border}┌ {}{title}{}{border} {}┐{}",
        Theme::bold(),
        Theme::reset(),
        "─".repeat(inner.saturating_sub(char_len(&title) + 2)),
        Theme::reset()
    );

    for row in top + 1..top + height.saturating_sub(1) {
        position_cursor(row, left);
        print!("{border}│{}{}{border}│{}", Theme::reset(), " ".repeat(inner), Theme::reset());
    }

    position_cursor(top + height.saturating_sub(1), left);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}

/// Left column that centers a box of `width` in `cols`.
const fn centered_left(width: usize, cols: usize) -> usize {
    cols.saturating_sub(width) / 2 + 1
}
