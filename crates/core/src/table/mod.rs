//! Generic paginated data table
//!
//! [`DataTable`] is pure state over [`QueryParams`](baitulmal_domain::QueryParams);
//! [`TableController`] pairs it with a [`PageSource`](crate::query::PageSource)
//! and the query cache. [`configs`] holds the per-entity column sets.

pub mod column;
pub mod configs;
pub mod controller;
pub mod data_table;
pub mod view;

pub use column::{ColumnDef, RowAction};
pub use controller::TableController;
pub use data_table::DataTable;
pub use view::{
    ColumnToggle, HeaderCell, PaginationView, SortIndicator, TableBody, TableRow, TableView,
};
