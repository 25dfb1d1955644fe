//! Rendered table snapshot

use std::fmt;

use serde::Serialize;

/// Arrow next to a sortable header
///
/// `Up` marks the active sort column, `Down` every other sortable column;
/// the arrow does not follow the sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub id: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub indicator: Option<SortIndicator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Labels of the row's action menu entries
    pub actions: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TableBody {
    Rows(Vec<TableRow>),
    /// Single full-width placeholder row
    Empty { colspan: usize, message: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    /// 0-based
    pub page_index: u32,
    pub page_size: u32,
    pub page_count: u64,
    pub item_count: u64,
}

impl PaginationView {
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        u64::from(self.page_index) + 1 < self.page_count
    }
}

/// Entry of the column visibility menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnToggle {
    pub id: &'static str,
    pub visible: bool,
}

/// Everything a front end needs to draw one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    /// Trailing header of the per-row actions column
    pub actions_header: Option<&'static str>,
    pub body: TableBody,
    pub pagination: PaginationView,
    pub column_toggles: Vec<ColumnToggle>,
    /// The "include deleted" switch is offered (admins only)
    pub show_include_deleted: bool,
    pub include_deleted: bool,
}

impl TableView {
    pub fn rows(&self) -> &[TableRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Empty { .. } => &[],
        }
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header: Vec<String> = self
            .headers
            .iter()
            .map(|cell| match cell.indicator {
                Some(SortIndicator::Up) => format!("{} ^", cell.label),
                Some(SortIndicator::Down) => format!("{} v", cell.label),
                None => cell.label.to_string(),
            })
            .collect();
        header.extend(self.actions_header.map(str::to_string));
        writeln!(f, "{}", header.join(" | "))?;

        match &self.body {
            TableBody::Empty { message, .. } => writeln!(f, "{message}")?,
            TableBody::Rows(rows) => {
                for row in rows {
                    let mut line = row.cells.join(" | ");
                    if self.actions_header.is_some() {
                        line.push_str(" | ");
                        line.push_str(&row.actions.join(", "));
                    }
                    writeln!(f, "{line}")?;
                }
            }
        }

        let page = &self.pagination;
        write!(
            f,
            "Page {} of {} ({} items)",
            page.page_index + 1,
            page.page_count.max(1),
            page.item_count
        )
    }
}
