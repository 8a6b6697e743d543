use crate::ui::helpers::{self, char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, DisplayItem};

/// Column titles; the sorted column carries its direction arrow.
pub fn render_table_headers(row: usize, columns: &[ColumnHeader], theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());

    for column in columns {
        let indicator = column.sort.map(|direction| direction.indicator());
        let room = column.width.saturating_sub(indicator.map_or(1, |_| 3));
        let title = truncate(&column.title.to_uppercase(), room);

        print!("{}{title}", Theme::fg(&theme.colors.header_fg));
        let mut used = char_len(&title);
        if let Some(arrow) = indicator {
            print!(" {}{arrow}", Theme::fg(&theme.colors.sort_indicator_fg));
            used += 2;
        }
        print!("{}", " ".repeat(column.width.saturating_sub(used)));
    }

    print!("{}", Theme::reset());
    row + 1
}

pub fn render_table_rows(row: usize, items: &[DisplayItem], columns: &[ColumnHeader], theme: &Theme) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, columns, theme);
    }
    current_row
}

fn render_table_row(row: usize, item: &DisplayItem, columns: &[ColumnHeader], theme: &Theme) -> usize {
    position_cursor(row, 1);

    let style = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{style}");

    for (cell, column) in item.cells.iter().zip(columns) {
        helpers::render_highlighted_text(&cell.text, &cell.highlight_ranges, theme, &style);
        print!("{}", " ".repeat(column.width.saturating_sub(char_len(&cell.text))));
    }

    let actions_width = columns.last().map_or(0, |column| column.width);
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", pad(&item.actions, actions_width));

    print!("{}", Theme::reset());
    row + 1
}
