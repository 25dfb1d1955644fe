//! Pagination contract shared with the backend
//!
//! [`QueryParams`] is the client-side description of "which page, sorted
//! how, filtered by what". It is owned by whoever renders a table and is
//! never persisted. [`PaginatedResponse`] is the backend's answer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::impl_domain_status_conversions;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl_domain_status_conversions!(SortOrder {
    Asc => "asc",
    Desc => "desc",
});

/// Query parameters for paginated list endpoints
///
/// Serializes with the backend's PascalCase names; entity filters are
/// flattened next to the standard fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryParams {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
    /// Entity-specific filters, e.g. `Role=Admin`
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl QueryParams {
    /// Defaults for a fresh table: first page, default size
    pub fn new() -> Self {
        Self {
            page_number: Some(DEFAULT_PAGE_NUMBER),
            page_size: Some(DEFAULT_PAGE_SIZE),
            ..Self::default()
        }
    }

    pub fn page_number_or_default(&self) -> u32 {
        self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER).max(1)
    }

    pub fn page_size_or_default(&self) -> u32 {
        match self.page_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number.max(1));
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Apply a search term and go back to the first page
    ///
    /// A blank term clears the search.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search_term = if term.trim().is_empty() { None } else { Some(term) };
        self.page_number = Some(DEFAULT_PAGE_NUMBER);
        self
    }

    /// Sort by `field`, or clear sorting with `None`
    #[must_use]
    pub fn with_sort_field(mut self, field: Option<String>) -> Self {
        self.sort_by_field = field;
        self
    }

    #[must_use]
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    #[must_use]
    pub fn with_include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = Some(include);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Query-string pairs in wire form, omitting unset values
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page_number {
            pairs.push(("PageNumber".to_string(), page.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("PageSize".to_string(), size.to_string()));
        }
        if let Some(field) = self.sort_by_field.as_ref().filter(|f| !f.is_empty()) {
            pairs.push(("SortByField".to_string(), field.clone()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("SortOrder".to_string(), order.to_string()));
        }
        if let Some(term) = &self.search_term {
            pairs.push(("SearchTerm".to_string(), term.clone()));
        }
        if let Some(include) = self.include_deleted {
            pairs.push(("IncludeDeleted".to_string(), include.to_string()));
        }
        pairs.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}

/// One page of results from a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub item_count: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl<T> PaginatedResponse<T> {
    /// Empty page shown before the first successful fetch
    pub const fn placeholder() -> Self {
        Self {
            items: Vec::new(),
            page_number: 0,
            page_size: 0,
            item_count: 0,
            has_next_page: false,
            has_previous_page: false,
        }
    }

    /// `ceil(item_count / page_size)`; zero when the page size is unknown
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            0
        } else {
            self.item_count.div_ceil(u64::from(self.page_size))
        }
    }

    /// Page number to request next when loading incrementally
    pub const fn next_page_param(&self) -> Option<u32> {
        if self.has_next_page {
            Some(self.page_number + 1)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            item_count: self.item_count,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
        }
    }
}
