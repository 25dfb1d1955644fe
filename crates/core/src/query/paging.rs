//! Paged list sources and incremental ("load more") fetching

use async_trait::async_trait;
use baitulmal_common::cache::QueryKey;
use baitulmal_domain::{PaginatedResponse, QueryParams, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::QueryClient;

/// A paginated backend list
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Operation name used as the cache key prefix
    fn operation(&self) -> &'static str;

    /// Fetch one page without consulting any cache
    async fn fetch_page(&self, params: &QueryParams) -> Result<PaginatedResponse<T>>;
}

/// Cache key for one page of `source`
pub fn page_key(operation: &str, params: &QueryParams) -> QueryKey {
    QueryKey::new(operation).with_params(params)
}

/// Load pages of `page_size` starting at page 1 until the backend reports no
/// next page.
///
/// Each page is cached under its own key. Stops early if the backend hands
/// back a page number that does not advance.
pub async fn fetch_all_pages<T, S>(
    client: &QueryClient,
    source: &S,
    base: &QueryParams,
    page_size: u32,
) -> Result<Vec<PaginatedResponse<T>>>
where
    T: Serialize + DeserializeOwned + Send,
    S: PageSource<T> + ?Sized,
{
    let mut pages = Vec::new();
    let mut next = Some(1_u32);

    while let Some(page_number) = next {
        let params = base.clone().with_page(page_number).with_page_size(page_size);
        let page: PaginatedResponse<T> = client
            .fetch(page_key(source.operation(), &params), || source.fetch_page(&params))
            .await?;

        next = page.next_page_param();
        if next.is_some_and(|n| n <= page_number) {
            warn!(operation = source.operation(), page_number, "page cursor did not advance");
            next = None;
        }
        pages.push(page);
    }

    debug!(operation = source.operation(), pages = pages.len(), "loaded all pages");
    Ok(pages)
}
