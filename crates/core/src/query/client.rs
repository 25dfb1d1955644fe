//! Keyed server-state cache

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use baitulmal_common::cache::{Cache, CacheConfig, CacheStats, QueryKey};
use baitulmal_common::clock::{Clock, SystemClock};
use baitulmal_domain::{BaitulMalError, Result};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::mutation::{Invalidation, Mutation};
use crate::notifications::{Notifier, Toast};

/// Shared cache of backend responses
///
/// Values are stored as JSON so one cache serves every entity type. Clones
/// share the same entries.
///
/// Besides the cache, the client remembers the last value stored under each
/// key. Invalidation and expiry do not touch it; only [`clear`](Self::clear)
/// does. [`fetch_or_placeholder`](Self::fetch_or_placeholder) falls back to
/// it while a refetch is failing.
#[derive(Clone)]
pub struct QueryClient {
    cache: Cache<QueryKey, Value, Arc<dyn Clock>>,
    last_good: Arc<Mutex<HashMap<QueryKey, Value>>>,
    notifier: Arc<dyn Notifier>,
}

impl QueryClient {
    /// Client without stale time: entries live until invalidated
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        let config = CacheConfig::builder().track_metrics(true).build();
        Self::with_cache_config(config, Arc::new(SystemClock), notifier)
    }

    /// Client with explicit cache settings (stale time, capacity) and clock
    pub fn with_cache_config(
        config: CacheConfig,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cache: Cache::with_clock(config, clock),
            last_good: Arc::new(Mutex::new(HashMap::new())),
            notifier,
        }
    }

    /// Return the cached value for `key`, or run `fetcher` and cache its
    /// result.
    ///
    /// A failed fetch raises a destructive toast with the backend message and
    /// caches nothing.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(value) = self.cached(&key) {
            debug!(key = %key, "query cache hit");
            return Ok(value);
        }

        debug!(key = %key, "query cache miss");
        match fetcher().await {
            Ok(value) => {
                self.set(key, &value);
                Ok(value)
            }
            Err(err) => {
                warn!(key = %key, error = %err, "query failed");
                self.report_error(&err);
                Err(err)
            }
        }
    }

    /// Like [`fetch`](Self::fetch) but never fails
    ///
    /// On failure it yields the last good value for `key`, or `T::default()`
    /// when there has never been one. The failure is still reported through
    /// the notifier.
    pub async fn fetch_or_placeholder<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> T
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match self.fetch(key.clone(), fetcher).await {
            Ok(value) => value,
            Err(_) => self.last_good(&key).unwrap_or_default(),
        }
    }

    /// Last value stored under `key`, even if since invalidated or expired
    pub fn last_good<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self.last_good.lock().get(key).cloned()?;
        serde_json::from_value(value).ok()
    }

    /// Cached value for `key`, if present and decodable as `T`
    pub fn cached<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self.cache.get(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!(key = %key, error = %err, "dropping undecodable cache entry");
                self.cache.remove(key);
                None
            }
        }
    }

    /// Store `value` under `key`
    pub fn set<T: Serialize>(&self, key: QueryKey, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.last_good.lock().insert(key.clone(), json.clone());
                self.cache.insert(key, json);
            }
            Err(err) => warn!(key = %key, error = %err, "value not cacheable"),
        }
    }

    /// Drop every entry of `operation`, whatever its parameters
    pub fn invalidate(&self, operation: &str) -> usize {
        let removed = self.cache.remove_where(|key| key.operation() == operation);
        debug!(operation, removed, "invalidated queries");
        removed
    }

    /// Drop exactly one entry
    pub fn invalidate_key(&self, key: &QueryKey) -> bool {
        self.cache.remove(key).is_some()
    }

    /// Drop everything, e.g. on logout
    pub fn clear(&self) {
        self.cache.clear();
        self.last_good.lock().clear();
    }

    /// Size and hit/miss counters of the underlying cache
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Raise a toast through the configured notifier
    pub fn notify(&self, toast: Toast) {
        self.notifier.notify(toast);
    }

    /// Global error hook: destructive toast with the backend message
    pub fn report_error(&self, err: &BaitulMalError) {
        self.notifier.notify(Toast::from_error(err));
    }

    /// Run a write against the backend.
    ///
    /// On success every invalidation in `mutation` is applied before the
    /// success toast is raised. On failure the global error toast is raised,
    /// followed by the mutation's own error toast when it has one.
    pub async fn mutate<T, Fut>(&self, mutation: Mutation, request: Fut) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
    {
        match request.await {
            Ok(value) => {
                for invalidation in mutation.invalidations() {
                    match invalidation {
                        Invalidation::Operation(operation) => {
                            self.invalidate(operation);
                        }
                        Invalidation::Key(key) => {
                            self.invalidate_key(key);
                        }
                    }
                }
                info!(mutation = mutation.name(), "mutation succeeded");
                if let Some(toast) = mutation.success() {
                    self.notify(toast.clone());
                }
                Ok(value)
            }
            Err(err) => {
                warn!(mutation = mutation.name(), error = %err, "mutation failed");
                self.report_error(&err);
                if let Some(toast) = mutation.failure() {
                    self.notify(toast.clone());
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use baitulmal_common::clock::MockClock;
    use baitulmal_domain::constants::message_keys;

    use super::*;
    use crate::notifications::ToastVariant;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Toast>>);

    impl Notifier for Recorder {
        fn notify(&self, toast: Toast) {
            self.0.lock().push(toast);
        }
    }

    fn client() -> (QueryClient, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        (QueryClient::new(recorder.clone()), recorder)
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_cache() {
        let (client, _) = client();
        let key = QueryKey::new("sector_get_all").with_params(&1);

        let first: Vec<String> =
            client.fetch(key.clone(), || async { Ok(vec!["Health".to_string()]) }).await.unwrap();
        let second: Vec<String> = client
            .fetch(key, || async { Err(BaitulMalError::Internal("not called".into())) })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(client.stats().hits, 1);
    }

    #[tokio::test]
    async fn failed_fetch_toasts_and_caches_nothing() {
        let (client, recorder) = client();
        let key = QueryKey::new("donor_get_all");

        let result: Result<u32> = client
            .fetch(key.clone(), || async { Err(BaitulMalError::Network("down".into())) })
            .await;

        assert!(result.is_err());
        assert!(client.cached::<u32>(&key).is_none());
        let toasts = recorder.0.lock();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, ToastVariant::Destructive);
        assert_eq!(toasts[0].description, "An unknown error occurred");
    }

    #[tokio::test]
    async fn placeholder_on_failure() {
        let (client, _) = client();
        let value: Vec<u32> = client
            .fetch_or_placeholder(QueryKey::new("me"), || async {
                Err(BaitulMalError::Network("down".into()))
            })
            .await;
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn placeholder_keeps_last_good_value_after_invalidation() {
        let (client, recorder) = client();
        let key = QueryKey::new("project_get_all").with_params(&1);
        let first: Vec<String> = client
            .fetch_or_placeholder(key.clone(), || async { Ok(vec!["Water Wells".to_string()]) })
            .await;
        assert_eq!(first, vec!["Water Wells".to_string()]);

        client.invalidate("project_get_all");
        let stale: Vec<String> = client
            .fetch_or_placeholder(key.clone(), || async {
                Err(BaitulMalError::Network("down".into()))
            })
            .await;

        assert_eq!(stale, first);
        assert!(client.cached::<Vec<String>>(&key).is_none());
        assert_eq!(recorder.0.lock().len(), 1);

        client.clear();
        let empty: Vec<String> = client
            .fetch_or_placeholder(key, || async { Err(BaitulMalError::Network("down".into())) })
            .await;
        assert!(empty.is_empty());
    }

    #[test]
    fn invalidate_drops_all_params_of_one_operation() {
        let (client, _) = client();
        client.set(QueryKey::new("project_get_all").with_params(&1), &"a");
        client.set(QueryKey::new("project_get_all").with_params(&2), &"b");
        client.set(QueryKey::new("sector_get_all"), &"c");

        assert_eq!(client.invalidate("project_get_all"), 2);
        assert!(client.cached::<String>(&QueryKey::new("sector_get_all")).is_some());
    }

    #[test]
    fn entries_expire_after_stale_time() {
        let clock = MockClock::new();
        let client = QueryClient::with_cache_config(
            CacheConfig::ttl(Duration::from_secs(60)),
            Arc::new(clock.clone()),
            Arc::new(Recorder::default()),
        );
        let key = QueryKey::new("get_organization_info");
        client.set(key.clone(), &42_u32);

        clock.advance(Duration::from_secs(61));

        assert!(client.cached::<u32>(&key).is_none());
    }

    #[tokio::test]
    async fn mutation_failure_raises_global_then_own_toast() {
        let (client, recorder) = client();
        let mutation = Mutation::new("create_sector")
            .error_toast(Toast::failure(message_keys::SECTOR_CREATED_ERROR));

        let result: Result<()> =
            client.mutate(mutation, async { Err(BaitulMalError::Network("down".into())) }).await;

        assert!(result.is_err());
        let toasts = recorder.0.lock();
        assert_eq!(toasts.len(), 2);
        assert!(toasts[0].title.is_none());
        assert_eq!(toasts[1].title.as_deref(), Some("SECTOR_CREATED_ERROR_TITLE"));
    }
}
