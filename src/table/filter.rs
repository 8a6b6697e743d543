//! Search and sort over rendered table rows.
//!
//! [`TableFilter`] hides rows that do not contain the search query and orders
//! rows by a column. It operates on whatever rows are currently rendered, so the
//! application re-applies it after every re-render through
//! [`TableFilter::reapply`].
//!
//! Sort direction lives in an explicit [`SortState`] owned by the filter. Sorting
//! by the column that is already sorted flips the direction; sorting by another
//! column starts ascending.

use super::renderer::{RecordTable, COLUMNS};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to the sorted column header.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Column currently sorted and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

/// Search query and sort state applied over a [`RecordTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    query: String,
    sort: Option<SortState>,
}

impl TableFilter {
    /// The last query passed to [`apply_filter`](Self::apply_filter).
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current sort state, `None` until a column has been sorted.
    #[must_use]
    pub const fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Hides every row whose text does not contain `query`, ignoring case.
    ///
    /// An empty query shows all rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_authority::domain::{RecordFields, TravelRecord};
    /// use travel_authority::table::{RecordTable, TableFilter};
    ///
    /// let records = vec![
    ///     TravelRecord::create(RecordFields { destination: "Manila".into(), ..Default::default() }),
    ///     TravelRecord::create(RecordFields { destination: "Cebu".into(), ..Default::default() }),
    /// ];
    /// let mut table = RecordTable::default();
    /// table.render(&records);
    ///
    /// let mut filter = TableFilter::default();
    /// filter.apply_filter(&mut table, "MANI");
    /// assert_eq!(table.visible_count(), 1);
    /// ```
    pub fn apply_filter(&mut self, table: &mut RecordTable, query: &str) {
        self.query = query.to_string();
        self.filter_rows(table);
    }

    /// Sorts all rows by `column`.
    ///
    /// Returns `false` without touching the table if the column does not exist
    /// or is not sortable.
    pub fn sort_by_column(&mut self, table: &mut RecordTable, column: usize) -> bool {
        if !COLUMNS.get(column).is_some_and(|c| c.sortable) {
            tracing::debug!(column = column, "ignoring sort on non-sortable column");
            return false;
        }

        let direction = match self.sort {
            Some(state) if state.column == column => state.direction.flip(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortState { column, direction });

        tracing::debug!(column = column, direction = ?direction, "sorting table");
        self.reapply_sort(table);
        true
    }

    /// Re-applies the stored query and sort to freshly rendered rows, without
    /// toggling the sort direction.
    pub fn reapply(&self, table: &mut RecordTable) {
        self.reapply_sort(table);
        self.filter_rows(table);
    }

    fn filter_rows(&self, table: &mut RecordTable) {
        let needle = self.query.to_lowercase();
        for row in table.rows_mut() {
            row.hidden = !row.text().to_lowercase().contains(&needle);
        }
    }

    /// Re-sorts rows by the current [`SortState`] without toggling. No-op
    /// until a column has been sorted.
    pub fn reapply_sort(&self, table: &mut RecordTable) {
        let Some(state) = self.sort else {
            return;
        };

        let rows = table.rows_mut();
        rows.sort_by(|a, b| {
            natural_cmp(
                a.cell(state.column).unwrap_or_default(),
                b.cell(state.column).unwrap_or_default(),
            )
        });
        if state.direction == SortDirection::Descending {
            rows.reverse();
        }
    }
}

/// A run of either ASCII digits or other characters.
#[derive(Debug, Clone, Copy)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(rest.len(), |(i, _)| i);
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(if digits { Chunk::Digits(run) } else { Chunk::Text(run) })
    })
}

/// Base letters only: decomposed, combining marks dropped, lowercased.
fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    fold(a).cmp(fold(b))
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares two strings ignoring case and accents, treating digit runs as
/// numbers.
///
/// `"item2"` sorts before `"item10"`, `"Cebú"` equals `"Cebu"`, and ISO dates
/// sort chronologically.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use travel_authority::table::natural_cmp;
///
/// assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
/// assert_eq!(natural_cmp("Manila", "manila"), Ordering::Equal);
/// assert_eq!(natural_cmp("Édgar", "Fred"), Ordering::Less);
/// ```
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);

    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => cmp_digits(x, y),
            (Some(Chunk::Digits(x) | Chunk::Text(x)), Some(Chunk::Digits(y) | Chunk::Text(y))) => {
                cmp_text(x, y)
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordFields, TravelRecord};
    use crate::table::renderer::DATA_COLUMNS;

    fn record(name: &str, rank: &str, destination: &str, departure: &str) -> TravelRecord {
        TravelRecord::create(RecordFields {
            name: name.to_string(),
            rank: rank.to_string(),
            destination: destination.to_string(),
            purpose: "Conference".to_string(),
            departure: departure.to_string(),
            return_date: "2024-12-31".to_string(),
        })
    }

    fn table() -> RecordTable {
        let mut table = RecordTable::default();
        table.render(&[
            record("Ana Cruz", "Lt 10", "Manila", "2024-03-05"),
            record("ben Reyes", "Lt 2", "Cebu", "2024-01-20"),
            record("Carla Diaz", "Capt", "Davao", "2023-12-01"),
            record("dino Lim", "Lt 2", "Baguio", "2024-01-02"),
        ]);
        table
    }

    fn column(table: &RecordTable, index: usize) -> Vec<String> {
        table.rows().iter().map(|r| r.cells[index].clone()).collect()
    }

    #[test]
    fn filter_hides_exactly_non_matching_rows() {
        let mut table = table();
        let mut filter = TableFilter::default();

        for query in ["", "lt", "LT 2", "2024-01", "an", "zzz", " "] {
            filter.apply_filter(&mut table, query);
            let needle = query.to_lowercase();
            for row in table.rows() {
                assert_eq!(row.hidden, !row.text().to_lowercase().contains(&needle), "query {query:?}");
            }
        }
    }

    #[test]
    fn sort_ascending_orders_adjacent_pairs() {
        let mut table = table();
        let mut filter = TableFilter::default();

        for index in 0..DATA_COLUMNS {
            filter = TableFilter::default();
            assert!(filter.sort_by_column(&mut table, index));
            let values = column(&table, index);
            for pair in values.windows(2) {
                assert_ne!(natural_cmp(&pair[0], &pair[1]), Ordering::Greater, "column {index}");
            }
        }
        assert_eq!(filter.sort().map(|s| s.direction), Some(SortDirection::Ascending));
    }

    #[test]
    fn second_sort_on_same_column_reverses_exactly() {
        let mut table = table();
        let mut filter = TableFilter::default();

        filter.sort_by_column(&mut table, 1);
        let ascending: Vec<_> = table.rows().iter().map(|r| r.id.clone()).collect();
        filter.sort_by_column(&mut table, 1);
        let descending: Vec<_> = table.rows().iter().map(|r| r.id.clone()).collect();

        let mut reversed = ascending;
        reversed.reverse();
        assert_eq!(descending, reversed);
        assert_eq!(
            filter.sort(),
            Some(SortState { column: 1, direction: SortDirection::Descending })
        );
    }

    #[test]
    fn switching_columns_restarts_ascending() {
        let mut table = table();
        let mut filter = TableFilter::default();

        filter.sort_by_column(&mut table, 0);
        filter.sort_by_column(&mut table, 0);
        filter.sort_by_column(&mut table, 4);

        assert_eq!(
            filter.sort(),
            Some(SortState { column: 4, direction: SortDirection::Ascending })
        );
        assert_eq!(
            column(&table, 4),
            vec!["2023-12-01", "2024-01-02", "2024-01-20", "2024-03-05"]
        );
    }

    #[test]
    fn numeric_aware_rank_sort() {
        let mut table = table();
        let mut filter = TableFilter::default();
        filter.sort_by_column(&mut table, 1);

        assert_eq!(column(&table, 1), vec!["Capt", "Lt 2", "Lt 2", "Lt 10"]);
    }

    #[test]
    fn case_insensitive_name_sort() {
        let mut table = table();
        let mut filter = TableFilter::default();
        filter.sort_by_column(&mut table, 0);

        assert_eq!(
            column(&table, 0),
            vec!["Ana Cruz", "ben Reyes", "Carla Diaz", "dino Lim"]
        );
    }

    #[test]
    fn actions_column_is_not_sortable() {
        let mut table = table();
        let before = table.clone();
        let mut filter = TableFilter::default();

        assert!(!filter.sort_by_column(&mut table, DATA_COLUMNS));
        assert!(!filter.sort_by_column(&mut table, 42));
        assert_eq!(table, before);
        assert_eq!(filter.sort(), None);
    }

    #[test]
    fn sort_includes_hidden_rows() {
        let mut table = table();
        let mut filter = TableFilter::default();
        filter.apply_filter(&mut table, "cebu");
        filter.sort_by_column(&mut table, 2);

        assert_eq!(column(&table, 2), vec!["Baguio", "Cebu", "Davao", "Manila"]);
        assert_eq!(table.visible_count(), 1);
    }

    #[test]
    fn reapply_restores_query_and_sort_without_toggling() {
        let mut table = table();
        let mut filter = TableFilter::default();
        filter.sort_by_column(&mut table, 2);
        filter.sort_by_column(&mut table, 2);
        filter.apply_filter(&mut table, "lt");
        let expected = table.clone();

        table = self::table();
        filter.reapply(&mut table);

        assert_eq!(column(&table, 2), column(&expected, 2));
        assert_eq!(table.visible_count(), 3);
        assert_eq!(filter.sort().map(|s| s.direction), Some(SortDirection::Descending));
    }

    #[test]
    fn natural_cmp_orders_numbers_by_value() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("a10b", "a9c"), Ordering::Greater);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("9", "a"), Ordering::Less);
    }

    #[test]
    fn natural_cmp_ignores_accents() {
        assert_eq!(natural_cmp("Édgar", "Fred"), Ordering::Less);
        assert_eq!(natural_cmp("Cebú", "Cebu"), Ordering::Equal);
        assert_eq!(natural_cmp("Ñoño 2", "nono 10"), Ordering::Less);
    }
}
