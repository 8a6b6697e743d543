//! Table renderer projecting the record collection into rows.
//!
//! [`RecordTable`] is a derived, disposable view of the record store. Every call
//! to [`RecordTable::render`] throws away all rows and rebuilds them from the
//! given records, so the table never drifts from the store through partial
//! updates. Each row carries the [`RecordId`] of its record as metadata; edit and
//! delete actions resolve that identifier against the store rather than trusting
//! the row's cell text.

use crate::domain::{RecordId, TravelRecord};

/// Number of data columns (one per record attribute).
pub const DATA_COLUMNS: usize = 6;

/// Static description of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub title: &'static str,
    /// Whether clicking the header (pressing its number) sorts by it.
    pub sortable: bool,
}

/// All table columns in display order. The trailing actions column holds the
/// per-row edit/delete controls and is never sortable.
pub const COLUMNS: [Column; DATA_COLUMNS + 1] = [
    Column { title: "Name", sortable: true },
    Column { title: "Rank", sortable: true },
    Column { title: "Destination", sortable: true },
    Column { title: "Purpose", sortable: true },
    Column { title: "Departure", sortable: true },
    Column { title: "Return", sortable: true },
    Column { title: "Actions", sortable: false },
];

/// Per-row action controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    /// Label drawn in the actions column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "[edit]",
            Self::Delete => "[delete]",
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Identifier of the record this row was rendered from.
    pub id: RecordId,
    /// Cell text for the data columns.
    pub cells: [String; DATA_COLUMNS],
    /// Action controls attached to the row.
    pub actions: [RowAction; 2],
    /// Set by the search filter when the row does not match.
    pub hidden: bool,
}

impl RenderedRow {
    fn from_record(record: &TravelRecord) -> Self {
        Self {
            id: record.id.clone(),
            cells: record.fields.cells().map(str::to_string),
            actions: [RowAction::Edit, RowAction::Delete],
            hidden: false,
        }
    }

    /// Concatenated visible text of the data cells, used by the search filter.
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.join(" ")
    }

    /// Cell text of a data column, `None` for the actions column or out of range.
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// The rendered records table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    rows: Vec<RenderedRow>,
}

impl RecordTable {
    /// Clears every row and rebuilds one row per record, in the given order.
    ///
    /// Rendering the same records twice produces an identical table.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_authority::domain::{RecordFields, TravelRecord};
    /// use travel_authority::table::RecordTable;
    ///
    /// let records = vec![TravelRecord::create(RecordFields::default())];
    /// let mut table = RecordTable::default();
    /// table.render(&records);
    /// assert_eq!(table.rows().len(), 1);
    /// assert_eq!(table.rows()[0].id, records[0].id);
    /// ```
    pub fn render(&mut self, records: &[TravelRecord]) {
        let _span = tracing::trace_span!("table_render", record_count = records.len()).entered();

        self.rows.clear();
        self.rows.extend(records.iter().map(RenderedRow::from_record));
    }

    /// All rows, hidden or not, in display order.
    #[must_use]
    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    /// Mutable access for the search/sort filter.
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<RenderedRow> {
        &mut self.rows
    }

    /// Rows not hidden by the search filter, in display order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &RenderedRow> {
        self.rows.iter().filter(|row| !row.hidden)
    }

    /// Number of rows not hidden by the search filter.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_rows().count()
    }

    /// Finds the row rendered from the record `id`.
    #[must_use]
    pub fn find(&self, id: &RecordId) -> Option<&RenderedRow> {
        self.rows.iter().find(|row| &row.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordFields;

    fn record(name: &str) -> TravelRecord {
        TravelRecord::create(RecordFields {
            name: name.to_string(),
            rank: "Maj".to_string(),
            destination: "Cebu".to_string(),
            purpose: "Audit".to_string(),
            departure: "2024-02-01".to_string(),
            return_date: "2024-02-03".to_string(),
        })
    }

    #[test]
    fn render_is_idempotent() {
        let records = vec![record("A"), record("B")];
        let mut table = RecordTable::default();

        table.render(&records);
        let first = table.clone();
        table.render(&records);

        assert_eq!(table, first);
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn render_discards_previous_rows_and_filter_state() {
        let mut table = RecordTable::default();
        table.render(&[record("A"), record("B"), record("C")]);
        table.rows_mut()[0].hidden = true;

        let fresh = vec![record("D")];
        table.render(&fresh);

        assert_eq!(table.rows().len(), 1);
        assert!(!table.rows()[0].hidden);
        assert_eq!(table.rows()[0].cells[0], "D");
    }

    #[test]
    fn rows_expose_ids_and_actions() {
        let records = vec![record("A")];
        let mut table = RecordTable::default();
        table.render(&records);

        let row = table.find(&records[0].id).unwrap();
        assert_eq!(row.actions, [RowAction::Edit, RowAction::Delete]);
        assert_eq!(row.cell(5), Some("2024-02-03"));
        assert_eq!(row.cell(DATA_COLUMNS), None);
    }
}
