use super::login::render_field_line;
use super::{centered_left, render_box};
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormView;

const FORM_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 12;

/// Centered modal with one line per field and the validation message below.
pub fn render_form(form: &FormView, theme: &Theme, cols: usize, rows: usize) {
    let width = FORM_WIDTH.min(cols.saturating_sub(2));
    let height = form.fields.len() + 5;
    let left = centered_left(width, cols);
    let top = rows.saturating_sub(height) / 2 + 1;

    render_box(top, left, width, height, &form.title, theme);

    let inner = width.saturating_sub(4);
    for (offset, field) in form.fields.iter().enumerate() {
        position_cursor(top + 2 + offset, left + 2);
        render_field_line(field, theme, inner, LABEL_WIDTH);
    }

    if let Some(error) = &form.error {
        position_cursor(top + height - 2, left + 2);
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.invalid_fg),
            truncate(error, inner),
            Theme::reset()
        );
    }
}
