use super::{centered_left, render_box};
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldView, LoginView};

const LOGIN_WIDTH: usize = 44;
const LABEL_WIDTH: usize = 10;

pub fn render_login_box(top: usize, login: &LoginView, theme: &Theme, cols: usize) {
    let width = LOGIN_WIDTH.min(cols.saturating_sub(2));
    let left = centered_left(width, cols);
    // border + blank + fields + blank + hint + border
    let height = login.fields.len() + 5;

    render_box(top, left, width, height, "Sign in", theme);

    let inner = width.saturating_sub(4);
    for (offset, field) in login.fields.iter().enumerate() {
        position_cursor(top + 2 + offset, left + 2);
        render_field_line(field, theme, inner, LABEL_WIDTH);
    }

    position_cursor(top + height - 2, left + 2);
    print!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        truncate(&login.hint, inner),
        Theme::reset()
    );
}

/// `▸ Label     value▏` with the label in the invalid color when flagged.
///
/// Shared by the login box and the record form.
pub(super) fn render_field_line(field: &FieldView, theme: &Theme, width: usize, label_width: usize) {
    let marker = if field.focused { "▸" } else { " " };
    let label_color = if field.invalid {
        &theme.colors.invalid_fg
    } else {
        &theme.colors.header_fg
    };

    print!("{}{marker} ", Theme::fg(&theme.colors.sort_indicator_fg));
    print!(
        "{}{:<label_width$}{}",
        Theme::fg(label_color),
        truncate(field.label, label_width),
        Theme::reset()
    );

    let room = width.saturating_sub(label_width + 3);
    let caret = if field.focused { "▏" } else { "" };
    let value = truncate(&format!("{}{caret}", field.value), room);
    print!("{}{value}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
}
