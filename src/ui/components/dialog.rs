use super::{centered_left, render_box};
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogView;

const DIALOG_WIDTH: usize = 52;

pub fn render_dialog(dialog: &DialogView, theme: &Theme, cols: usize, rows: usize) {
    let width = DIALOG_WIDTH.min(cols.saturating_sub(2));
    let height = dialog.lines.len() + 4;
    let left = centered_left(width, cols);
    let top = rows.saturating_sub(height) / 2 + 1;

    render_box(top, left, width, height, dialog.title, theme);

    for (offset, line) in dialog.lines.iter().enumerate() {
        position_cursor(top + 2 + offset, left + 2);
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_normal),
            truncate(line, width.saturating_sub(4)),
            Theme::reset()
        );
    }
}
