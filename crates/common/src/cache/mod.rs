//! Keyed, thread-safe cache used for server-state queries.
//!
//! Entries are addressed by a [`QueryKey`] (operation name plus canonical
//! parameters) or by any other `Eq + Hash + Clone` key. The cache supports
//! optional TTL expiry through the [`Clock`](crate::clock::Clock)
//! abstraction, bounded size with LRU or FIFO eviction, predicate-based
//! invalidation, and hit/miss statistics.
//!
//! # Examples
//!
//! ```
//! use baitulmal_common::cache::{Cache, CacheConfig, QueryKey};
//!
//! let cache: Cache<QueryKey, String> = Cache::new(CacheConfig::lru(100));
//! let key = QueryKey::new("sector_get_all").with_params(&[("PageNumber", 1)]);
//!
//! cache.insert(key.clone(), "page one".to_string());
//! assert_eq!(cache.get(&key), Some("page one".to_string()));
//!
//! // Drop every entry cached for the operation, whatever its parameters.
//! cache.remove_where(|k| k.operation() == "sector_get_all");
//! assert!(cache.get(&key).is_none());
//! ```

mod config;
mod core;
mod key;
mod stats;

pub use config::{CacheConfig, CacheConfigBuilder, EvictionPolicy};
pub use core::Cache;
pub use key::QueryKey;
pub use stats::CacheStats;
