use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 5;

/// Three-row search box. The border is dimmed while focus is on the table.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = if search.active {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
    };

    position_cursor(row, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let caret = if search.active { "▏" } else { "" };
    let text = truncate(&format!(" Search: {}{caret}", search.query), inner_width);

    position_cursor(row + 1, 1);
    print!("{margin}{border}│{}", Theme::reset());
    print!("{}{text}", Theme::fg(&theme.colors.text_normal));
    print!("{}", " ".repeat(inner_width.saturating_sub(char_len(&text))));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
