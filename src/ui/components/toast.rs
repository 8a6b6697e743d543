use crate::app::notify::ToastVariant;
use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastView;

const TOAST_MAX_WIDTH: usize = 48;

/// Stacks toasts in the top-right corner, newest at the bottom.
pub fn render_toasts(toasts: &[ToastView], theme: &Theme, cols: usize) {
    for (offset, toast) in toasts.iter().enumerate() {
        let background = match toast.variant {
            ToastVariant::Success => &theme.colors.toast_success_bg,
            ToastVariant::Primary => &theme.colors.toast_primary_bg,
            ToastVariant::Danger => &theme.colors.toast_danger_bg,
        };

        let text = truncate(&toast.message, TOAST_MAX_WIDTH.min(cols.saturating_sub(4)));
        let width = char_len(&text) + 2;

        position_cursor(2 + offset, cols.saturating_sub(width + 1).max(1));
        print!(
            "{}{}{} {text} {}",
            Theme::bold(),
            Theme::fg(&theme.colors.toast_fg),
            Theme::bg(background),
            Theme::reset()
        );
    }
}
