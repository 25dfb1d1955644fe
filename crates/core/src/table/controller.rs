//! Table controller: params, fetching and debounced search for one table

use std::sync::Arc;

use baitulmal_common::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use baitulmal_domain::{PaginatedResponse, QueryParams, UserRole};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::data_table::DataTable;
use super::view::TableView;
use crate::query::{page_key, PageSource, QueryClient};

struct State<T> {
    table: DataTable<T>,
    /// Bumped on every parameter change; older fetches are ignored
    generation: u64,
    page: Option<PaginatedResponse<T>>,
}

impl<T> State<T> {
    fn change(&mut self, apply: impl FnOnce(&mut DataTable<T>) -> bool) -> bool {
        let changed = apply(&mut self.table);
        if changed {
            self.generation += 1;
        }
        changed
    }

    fn render(&self) -> TableView {
        match &self.page {
            Some(page) => self.table.render(page),
            None => self.table.render(&PaginatedResponse::placeholder()),
        }
    }
}

/// Binds a [`DataTable`] to a paged backend list
///
/// Fetch failures are reported by the query client; the controller keeps
/// showing the last good page, or the empty placeholder before the first.
pub struct TableController<T> {
    source: Arc<dyn PageSource<T>>,
    query: QueryClient,
    state: Arc<Mutex<State<T>>>,
    search: Debouncer,
}

impl<T> TableController<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    pub fn new(source: Arc<dyn PageSource<T>>, query: QueryClient, table: DataTable<T>) -> Self {
        let state = State { table, generation: 0, page: None };
        Self {
            source,
            query,
            state: Arc::new(Mutex::new(state)),
            search: Debouncer::new(DEFAULT_DEBOUNCE),
        }
    }

    pub fn params(&self) -> QueryParams {
        self.state.lock().table.params().clone()
    }

    /// Render the current state without fetching
    pub fn view(&self) -> TableView {
        self.state.lock().render()
    }

    /// Fetch the page for the current params and render it
    pub async fn refresh(&self) -> TableView {
        let (params, generation) = {
            let state = self.state.lock();
            (state.table.params().clone(), state.generation)
        };

        let key = page_key(self.source.operation(), &params);
        let fetched = self.query.fetch(key, || self.source.fetch_page(&params)).await;

        let mut state = self.state.lock();
        match fetched {
            Ok(page) if state.generation == generation => state.page = Some(page),
            Ok(_) => debug!(operation = self.source.operation(), "discarding stale page"),
            Err(_) => debug!(operation = self.source.operation(), "keeping previous page"),
        }
        state.render()
    }

    async fn change_and_refresh(
        &self,
        apply: impl FnOnce(&mut DataTable<T>) -> bool,
    ) -> TableView {
        let changed = self.state.lock().change(apply);
        if changed {
            self.refresh().await
        } else {
            self.view()
        }
    }

    pub async fn toggle_sort(&self, column_id: &str) -> TableView {
        self.change_and_refresh(|table| table.toggle_sort(column_id)).await
    }

    pub async fn go_to_page(&self, page_index: u32) -> TableView {
        self.change_and_refresh(|table| table.go_to_page(page_index)).await
    }

    pub async fn set_page_size(&self, page_size: u32) -> TableView {
        self.change_and_refresh(|table| table.set_page_size(page_size)).await
    }

    pub async fn set_include_deleted(&self, include: bool) -> TableView {
        self.change_and_refresh(|table| table.set_include_deleted(include)).await
    }

    pub async fn set_viewer_role(&self, role: Option<UserRole>) -> TableView {
        self.change_and_refresh(|table| {
            let before = table.params().clone();
            table.set_viewer_role(role);
            *table.params() != before
        })
        .await
    }

    /// Column visibility never reaches the backend
    pub fn set_column_visible(&self, column_id: &'static str, visible: bool) -> TableView {
        let mut state = self.state.lock();
        state.table.set_column_visible(column_id, visible);
        state.render()
    }

    /// Debounced search
    ///
    /// Resolves to the refreshed view once the term is applied, or `None`
    /// when a newer keystroke superseded it.
    pub async fn search(&self, term: &str) -> Option<TableView> {
        let state = Arc::clone(&self.state);
        let term = term.to_string();
        let handle = self.search.schedule(move || {
            state.lock().change(|table| {
                table.apply_search(&term);
                true
            });
        });

        match handle.await {
            Ok(true) => Some(self.refresh().await),
            _ => None,
        }
    }

    /// Drop a pending search
    pub fn cancel_search(&self) {
        self.search.cancel();
    }
}
