//! In-memory LRU cache for fetched URL lists.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::domain::entities::ImageUrl;
use crate::domain::ports::{CacheResult, UrlCachePort};

/// Default maximum number of URL lists to keep in memory.
pub const DEFAULT_CACHE_SIZE: usize = 64;

/// In-memory LRU cache for image URL lists.
///
/// Thread-safe. Capacity-based eviction is owned by this adapter; entries
/// live until displaced or the process exits.
pub struct MemoryUrlCache {
    cache: Arc<RwLock<LruCache<String, Vec<ImageUrl>>>>,
    hits: std::sync::atomic::AtomicU64,
    misses: std::sync::atomic::AtomicU64,
}

impl MemoryUrlCache {
    /// Creates a new cache with the specified capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Arc::new(RwLock::new(LruCache::new(cap))),
            hits: std::sync::atomic::AtomicU64::new(0),
            misses: std::sync::atomic::AtomicU64::new(0),
        }
    }

    /// Creates a new cache with the default capacity.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }

    /// Returns the current number of cached entries.
    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Removes every entry.
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
        debug!("Cleared memory URL cache");
    }

    /// Returns cache statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(std::sync::atomic::Ordering::Relaxed);
        let misses = self.misses.load(std::sync::atomic::Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
        }
    }
}

impl Default for MemoryUrlCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {:.1}% hit rate ({} hits, {} misses)",
            self.hit_rate, self.hits, self.misses
        )
    }
}

#[async_trait::async_trait]
impl UrlCachePort for MemoryUrlCache {
    async fn load(&self, key: &str) -> CacheResult<Option<Vec<ImageUrl>>> {
        let mut cache = self.cache.write().await;
        if let Some(urls) = cache.get(key) {
            self.hits
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            trace!(key = %key, "Memory cache hit");
            Ok(Some(urls.clone()))
        } else {
            self.misses
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            trace!(key = %key, "Memory cache miss");
            Ok(None)
        }
    }

    async fn save(&self, key: &str, urls: &[ImageUrl]) -> CacheResult<()> {
        let mut cache = self.cache.write().await;
        debug!(key = %key, count = urls.len(), "Storing URL list in memory cache");
        cache.put(key.to_string(), urls.to_vec());
        Ok(())
    }
}
