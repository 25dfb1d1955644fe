//! Column and row-action descriptions

use std::fmt;
use std::sync::Arc;

type Cell<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// One table column: backend field id, header label and cell renderer
pub struct ColumnDef<T> {
    id: &'static str,
    header: &'static str,
    hideable: bool,
    cell: Cell<T>,
}

impl<T> ColumnDef<T> {
    pub fn new<F>(id: &'static str, header: &'static str, cell: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self { id, header, hideable: true, cell: Arc::new(cell) }
    }

    /// Keep the column out of the visibility menu
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn is_hideable(&self) -> bool {
        self.hideable
    }

    pub fn render(&self, row: &T) -> String {
        (self.cell)(row)
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self { id: self.id, header: self.header, hideable: self.hideable, cell: self.cell.clone() }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("hideable", &self.hideable)
            .finish_non_exhaustive()
    }
}

/// Entry of a row's action menu, shown only for rows matching its predicate
pub struct RowAction<T> {
    label: &'static str,
    visible: Predicate<T>,
}

impl<T> RowAction<T> {
    pub fn new(label: &'static str) -> Self {
        Self { label, visible: Arc::new(|_| true) }
    }

    #[must_use]
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.visible = Arc::new(predicate);
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn applies_to(&self, row: &T) -> bool {
        (self.visible)(row)
    }
}

impl<T> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        Self { label: self.label, visible: self.visible.clone() }
    }
}

impl<T> fmt::Debug for RowAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction").field("label", &self.label).finish_non_exhaustive()
    }
}
