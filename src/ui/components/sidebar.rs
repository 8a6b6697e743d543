use super::render_box;
use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SidebarView;

const SIDEBAR_WIDTH: usize = 24;

/// Menu docked to the left edge below the header.
pub fn render_sidebar(sidebar: &SidebarView, theme: &Theme, rows: usize) {
    let top = 4;
    let height = (sidebar.entries.len() + 2).min(rows.saturating_sub(top + 1));
    render_box(top, 1, SIDEBAR_WIDTH, height, "Menu", theme);

    let inner = SIDEBAR_WIDTH - 2;
    for (index, entry) in sidebar.entries.iter().enumerate().take(height.saturating_sub(2)) {
        position_cursor(top + 1 + index, 2);
        if index == sidebar.selected_index {
            print!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            );
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}{}", pad(&format!(" {entry}"), inner), Theme::reset());
    }
}
