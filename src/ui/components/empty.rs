use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

fn centered(row: usize, text: &str, style: &str, cols: usize) {
    let len = char_len(text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}{}{text}", " ".repeat(padding));
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

/// Message plus a dimmed hint, centered on two rows starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    centered(row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);
    centered(
        row + 1,
        &empty.subtitle,
        &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        cols,
    );
}
