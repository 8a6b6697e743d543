//! Records table: rendering and search/sort.
//!
//! - `renderer`: rebuilds rows from the record collection
//! - `filter`: substring search and numeric-aware column sort over rendered rows

pub mod filter;
pub mod renderer;

pub use filter::{natural_cmp, SortDirection, SortState, TableFilter};
pub use renderer::{Column, RecordTable, RenderedRow, RowAction, COLUMNS, DATA_COLUMNS};
