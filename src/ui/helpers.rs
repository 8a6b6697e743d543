//! Shared rendering utilities.
//!
//! All widths and ranges here are in characters, not bytes.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending in `…` when shortened.
///
/// # Examples
///
/// ```
/// use travel_authority::ui::helpers::truncate;
///
/// assert_eq!(truncate("Destination", 6), "Desti…");
/// assert_eq!(truncate("Cebu", 6), "Cebu");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Pads `text` with spaces to `width` characters.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let len = char_len(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Finds every non-overlapping case-insensitive occurrence of `query` in
/// `text`, as `(start, end)` character ranges.
///
/// # Examples
///
/// ```
/// use travel_authority::ui::helpers::find_match_ranges;
///
/// assert_eq!(find_match_ranges("Manila, MANILA", "mani"), vec![(0, 4), (8, 12)]);
/// assert!(find_match_ranges("Cebu", "").is_empty());
/// ```
#[must_use]
pub fn find_match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    let mut ranges = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return ranges;
    }

    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Prints `text` with `ranges` drawn in the match highlight colors.
///
/// `restore` is re-emitted after each highlighted run so the surrounding style
/// (normal text or selected row) continues.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            print!("{}", chars[current_pos..start].iter().collect::<String>());
        }

        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            chars[start..end].iter().collect::<String>()
        );
        print!("{}{restore}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        print!("{}", chars[current_pos..].iter().collect::<String>());
    }
}
