//! Entity-agnostic paginated table state
//!
//! [`DataTable`] owns the query parameters and the client-only column
//! visibility. Every interaction yields new parameters; fetching is left to
//! [`TableController`](super::TableController).

use std::collections::BTreeSet;

use baitulmal_domain::constants::{message_keys, DEFAULT_PAGE_SIZE};
use baitulmal_domain::{PaginatedResponse, QueryParams, UserRole};

use super::column::{ColumnDef, RowAction};
use super::view::{
    ColumnToggle, HeaderCell, PaginationView, SortIndicator, TableBody, TableRow, TableView,
};

/// Table state for rows of type `T`
#[derive(Debug, Clone)]
pub struct DataTable<T> {
    columns: Vec<ColumnDef<T>>,
    sortable: Vec<&'static str>,
    actions: Vec<RowAction<T>>,
    params: QueryParams,
    hidden: BTreeSet<&'static str>,
    viewer_role: Option<UserRole>,
}

impl<T> DataTable<T> {
    pub fn new(columns: Vec<ColumnDef<T>>, params: QueryParams) -> Self {
        Self {
            columns,
            sortable: Vec::new(),
            actions: Vec::new(),
            params,
            hidden: BTreeSet::new(),
            viewer_role: None,
        }
    }

    /// Allow sorting on these column ids only
    #[must_use]
    pub fn sortable(mut self, ids: &[&'static str]) -> Self {
        self.sortable = ids.to_vec();
        self
    }

    /// Add a trailing per-row actions column
    #[must_use]
    pub fn with_actions(mut self, actions: Vec<RowAction<T>>) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub fn viewed_by(mut self, role: Option<UserRole>) -> Self {
        self.set_viewer_role(role);
        self
    }

    /// Change who is looking; a non-admin loses any "include deleted" flag
    pub fn set_viewer_role(&mut self, role: Option<UserRole>) {
        self.viewer_role = role;
        if !self.can_include_deleted() {
            self.params.include_deleted = None;
        }
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    pub fn is_sortable(&self, id: &str) -> bool {
        self.sortable.iter().any(|sortable| *sortable == id)
    }

    /// Header click: set `id` as sort field, or clear it when already active
    ///
    /// Returns whether the parameters changed.
    pub fn toggle_sort(&mut self, id: &str) -> bool {
        if !self.is_sortable(id) {
            return false;
        }
        let active = self.params.sort_by_field.as_deref() == Some(id);
        let field = (!active).then(|| id.to_string());
        self.params = std::mem::take(&mut self.params).with_sort_field(field);
        true
    }

    pub fn sort_indicator(&self, id: &str) -> Option<SortIndicator> {
        if !self.is_sortable(id) {
            return None;
        }
        if self.params.sort_by_field.as_deref() == Some(id) {
            Some(SortIndicator::Up)
        } else {
            Some(SortIndicator::Down)
        }
    }

    /// 0-based page index
    pub fn page_index(&self) -> u32 {
        self.params.page_number_or_default() - 1
    }

    pub fn page_size(&self) -> u32 {
        match self.params.page_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    /// Pages needed for `item_count` rows at the current page size
    pub fn page_count(&self, item_count: u64) -> u64 {
        item_count.div_ceil(u64::from(self.page_size()))
    }

    pub fn go_to_page(&mut self, page_index: u32) -> bool {
        let before = self.params.page_number;
        self.params.page_number = Some(page_index.saturating_add(1));
        before != self.params.page_number
    }

    /// Change the page size, staying on the page that holds the current
    /// first row
    pub fn set_page_size(&mut self, page_size: u32) -> bool {
        let page_size = page_size.max(1);
        let top_row = u64::from(self.page_size()) * u64::from(self.page_index());
        let page_index = u32::try_from(top_row / u64::from(page_size)).unwrap_or(u32::MAX - 1);
        let before = (self.params.page_number, self.params.page_size);
        self.params.page_size = Some(page_size);
        self.params.page_number = Some(page_index + 1);
        before != (self.params.page_number, self.params.page_size)
    }

    /// Apply a search term; always returns to the first page
    pub fn apply_search(&mut self, term: &str) {
        self.params = std::mem::take(&mut self.params).with_search_term(term);
    }

    pub fn can_include_deleted(&self) -> bool {
        self.viewer_role.is_some_and(UserRole::is_admin)
    }

    /// Admin-only switch; ignored for everyone else
    pub fn set_include_deleted(&mut self, include: bool) -> bool {
        if !self.can_include_deleted() {
            return false;
        }
        self.params.include_deleted = Some(include);
        true
    }

    pub fn set_column_visible(&mut self, id: &'static str, visible: bool) {
        let hideable = self.columns.iter().any(|c| c.id() == id && c.is_hideable());
        if !hideable {
            return;
        }
        if visible {
            self.hidden.remove(id);
        } else {
            self.hidden.insert(id);
        }
    }

    pub fn is_column_visible(&self, id: &str) -> bool {
        !self.hidden.contains(id)
    }

    fn visible_columns(&self) -> impl Iterator<Item = &ColumnDef<T>> {
        self.columns.iter().filter(|column| self.is_column_visible(column.id()))
    }

    /// Draw `page` with the current state
    pub fn render(&self, page: &PaginatedResponse<T>) -> TableView {
        let headers = self
            .visible_columns()
            .map(|column| HeaderCell {
                id: column.id(),
                label: column.header(),
                sortable: self.is_sortable(column.id()),
                indicator: self.sort_indicator(column.id()),
            })
            .collect();

        let body = if page.items.is_empty() {
            TableBody::Empty { colspan: self.columns.len(), message: message_keys::NO_DATA_FOUND }
        } else {
            let rows = page
                .items
                .iter()
                .map(|item| TableRow {
                    cells: self.visible_columns().map(|column| column.render(item)).collect(),
                    actions: self
                        .actions
                        .iter()
                        .filter(|action| action.applies_to(item))
                        .map(RowAction::label)
                        .collect(),
                })
                .collect();
            TableBody::Rows(rows)
        };

        let column_toggles = self
            .columns
            .iter()
            .filter(|column| column.is_hideable())
            .map(|column| ColumnToggle {
                id: column.id(),
                visible: self.is_column_visible(column.id()),
            })
            .collect();

        TableView {
            headers,
            actions_header: (!self.actions.is_empty()).then_some(message_keys::ACTIONS),
            body,
            pagination: PaginationView {
                page_index: self.page_index(),
                page_size: self.page_size(),
                page_count: self.page_count(page.item_count),
                item_count: page.item_count,
            },
            column_toggles,
            show_include_deleted: self.can_include_deleted(),
            include_deleted: self.params.include_deleted.unwrap_or(false),
        }
    }
}
