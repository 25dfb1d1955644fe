//! Core cache implementation with configurable eviction and TTL expiry

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;

use super::config::{CacheConfig, EvictionPolicy};
use super::stats::{CacheStats, MetricsCollector};
use crate::clock::{Clock, SystemClock};

/// Entry stored in the cache with metadata for eviction policies
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Internal storage for cache entries
#[derive(Debug)]
struct CacheStorage<K, V>
where
    K: Eq + Hash + Clone,
{
    entries: HashMap<K, CacheEntry<V>>,
    /// Tracks order for LRU/FIFO eviction
    access_order: Vec<K>,
}

impl<K, V> CacheStorage<K, V>
where
    K: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self { entries: HashMap::new(), access_order: Vec::new() }
    }

    fn remove(&mut self, key: &K) -> Option<CacheEntry<V>> {
        self.access_order.retain(|k| k != key);
        self.entries.remove(key)
    }
}

/// Generic thread-safe cache with configurable eviction policies
///
/// Clones share storage and counters, so one cache can be handed to several
/// services behind an `Arc` or by value.
///
/// # Type Parameters
/// - `K`: Key type (must be `Eq + Hash + Clone`)
/// - `V`: Value type (must be `Clone`)
/// - `C`: Clock type for time-based operations (defaults to `SystemClock`)
pub struct Cache<K, V, C = SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    storage: Arc<RwLock<CacheStorage<K, V>>>,
    config: CacheConfig,
    metrics: MetricsCollector,
    clock: C,
}

impl<K, V, C> Clone for Cache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock + Clone,
{
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<K, V> Cache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new cache with the given configuration using system clock
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> Cache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock + Clone,
{
    /// Create a new cache with a custom clock (useful for testing)
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            storage: Arc::new(RwLock::new(CacheStorage::new())),
            config,
            metrics: MetricsCollector::default(),
            clock,
        }
    }

    /// Insert a value into the cache
    ///
    /// If the cache is at capacity, an entry is evicted according to the
    /// configured eviction policy before inserting the new entry.
    pub fn insert(&self, key: K, value: V) {
        let mut storage = self.storage.write();

        if let Some(max_size) = self.config.max_size {
            if storage.entries.len() >= max_size && !storage.entries.contains_key(&key) {
                self.evict_one(&mut storage);
            }
        }

        let entry = CacheEntry { value, inserted_at: self.clock.now() };
        storage.entries.insert(key.clone(), entry);

        if matches!(self.config.eviction_policy, EvictionPolicy::LRU | EvictionPolicy::FIFO) {
            storage.access_order.retain(|k| k != &key);
            storage.access_order.push(key);
        }

        if self.config.track_metrics {
            self.metrics.record_insert();
        }
    }

    /// Get a value from the cache
    ///
    /// Returns `None` if the key doesn't exist or if the entry has expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut storage = self.storage.write();

        let Some(entry) = storage.entries.get(key) else {
            if self.config.track_metrics {
                self.metrics.record_miss();
            }
            return None;
        };

        if self.is_expired(entry) {
            storage.remove(key);
            if self.config.track_metrics {
                self.metrics.record_miss();
                self.metrics.record_expiration();
            }
            return None;
        }

        let value = entry.value.clone();
        if self.config.eviction_policy == EvictionPolicy::LRU {
            storage.access_order.retain(|k| k != key);
            storage.access_order.push(key.clone());
        }

        if self.config.track_metrics {
            self.metrics.record_hit();
        }

        Some(value)
    }

    /// Get or insert with a generator function
    ///
    /// If the key exists and hasn't expired, returns the cached value.
    /// Otherwise, generates a new value using the provided function.
    pub fn get_or_insert_with<F>(&self, key: K, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }

        let value = f();
        self.insert(key, value.clone());
        value
    }

    /// Whether a live (non-expired) entry exists, without touching metrics
    pub fn contains_key(&self, key: &K) -> bool {
        let storage = self.storage.read();
        storage.entries.get(key).is_some_and(|entry| !self.is_expired(entry))
    }

    /// Remove a value from the cache
    pub fn remove(&self, key: &K) -> Option<V> {
        let removed = self.storage.write().remove(key).map(|entry| entry.value);
        if removed.is_some() && self.config.track_metrics {
            self.metrics.record_invalidations(1);
        }
        removed
    }

    /// Remove every entry whose key matches `predicate`
    ///
    /// Returns the number of removed entries.
    pub fn remove_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&K) -> bool,
    {
        let mut storage = self.storage.write();
        let doomed: Vec<K> = storage.entries.keys().filter(|k| predicate(k)).cloned().collect();
        for key in &doomed {
            storage.remove(key);
        }

        if self.config.track_metrics {
            self.metrics.record_invalidations(doomed.len() as u64);
        }
        doomed.len()
    }

    /// Clear all entries from the cache
    pub fn clear(&self) {
        let mut storage = self.storage.write();
        storage.entries.clear();
        storage.access_order.clear();
    }

    /// Get the number of entries in the cache (including expired ones not
    /// yet cleaned up)
    pub fn len(&self) -> usize {
        self.storage.read().entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all expired entries
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        if self.config.ttl.is_none() {
            return 0;
        }

        let mut storage = self.storage.write();
        let expired: Vec<K> = storage
            .entries
            .iter()
            .filter(|(_, entry)| self.is_expired(entry))
            .map(|(k, _)| k.clone())
            .collect();

        for key in &expired {
            storage.remove(key);
            if self.config.track_metrics {
                self.metrics.record_expiration();
            }
        }

        expired.len()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.len(), self.config.max_size)
    }

    /// Reset statistics counters
    pub fn reset_stats(&self) {
        self.metrics.reset();
    }

    fn is_expired(&self, entry: &CacheEntry<V>) -> bool {
        self.config
            .ttl
            .is_some_and(|ttl| self.clock.now().duration_since(entry.inserted_at) >= ttl)
    }

    /// Evict one entry according to the eviction policy
    fn evict_one(&self, storage: &mut CacheStorage<K, V>) {
        let victim = match self.config.eviction_policy {
            EvictionPolicy::LRU | EvictionPolicy::FIFO => storage.access_order.first().cloned(),
            EvictionPolicy::None => None,
        };

        if let Some(key) = victim {
            storage.remove(&key);
            if self.config.track_metrics {
                self.metrics.record_eviction();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clock::MockClock;

    /// Validates basic insert and get.
    ///
    /// Assertions:
    /// - Inserted value is returned
    /// - Missing key returns `None`
    #[test]
    fn test_insert_and_get() {
        let cache: Cache<String, i32> = Cache::new(CacheConfig::default());
        cache.insert("a".to_string(), 1);

        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert_eq!(cache.get(&"b".to_string()), None);
    }

    /// Validates TTL expiry driven by a mock clock.
    ///
    /// Assertions:
    /// - Entry is visible before the TTL elapses
    /// - Entry is gone once the TTL elapses and counts as an expiration
    #[test]
    fn test_ttl_expiry_with_mock_clock() {
        let clock = MockClock::new();
        let config =
            CacheConfig::builder().ttl(Duration::from_secs(60)).track_metrics(true).build();
        let cache: Cache<&str, i32, MockClock> = Cache::with_clock(config, clock.clone());

        cache.insert("k", 7);
        clock.advance(Duration::from_secs(59));
        assert_eq!(cache.get(&"k"), Some(7));

        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.get(&"k"), None);
        assert_eq!(cache.stats().expirations, 1);
    }

    /// Validates LRU eviction order.
    ///
    /// Assertions:
    /// - Recently read entry survives
    /// - Least recently used entry is evicted
    #[test]
    fn test_lru_eviction() {
        let cache: Cache<i32, i32> = Cache::new(CacheConfig::lru(2));
        cache.insert(1, 1);
        cache.insert(2, 2);
        let _ = cache.get(&1);
        cache.insert(3, 3);

        assert!(cache.contains_key(&1));
        assert!(!cache.contains_key(&2));
        assert!(cache.contains_key(&3));
    }

    #[test]
    fn test_remove_where_counts_invalidations() {
        let config = CacheConfig::builder().track_metrics(true).build();
        let cache: Cache<String, i32> = Cache::new(config);
        cache.insert("user_get_all:1".to_string(), 1);
        cache.insert("user_get_all:2".to_string(), 2);
        cache.insert("sector_get_all:1".to_string(), 3);

        let removed = cache.remove_where(|k| k.starts_with("user_get_all"));

        assert_eq!(removed, 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().invalidations, 2);
    }

    #[test]
    fn test_clones_share_storage() {
        let cache: Cache<i32, i32> = Cache::new(CacheConfig::default());
        let other = cache.clone();
        other.insert(1, 10);
        assert_eq!(cache.get(&1), Some(10));
    }

    #[test]
    fn test_cleanup_expired() {
        let clock = MockClock::new();
        let cache: Cache<i32, i32, MockClock> =
            Cache::with_clock(CacheConfig::ttl(Duration::from_millis(100)), clock.clone());
        cache.insert(1, 1);
        cache.insert(2, 2);
        clock.advance_millis(150);
        cache.insert(3, 3);

        assert_eq!(cache.cleanup_expired(), 2);
        assert_eq!(cache.len(), 1);
    }
}
