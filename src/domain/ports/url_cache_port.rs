//! Port definition for the image URL list cache.

use crate::domain::entities::ImageUrl;

/// Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Errors that can occur during cache operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    /// Backing store rejected or failed the operation.
    #[error("cache backend error: {0}")]
    BackendError(String),
    /// Stored entry could not be encoded or decoded.
    #[error("cache decode error: {0}")]
    DecodeError(String),
    /// I/O error during cache operation.
    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for the write-through URL list cache.
///
/// Implementations must be thread-safe. Per-key semantics are
/// last-write-wins; eviction and expiry policy belong to the backing store,
/// never to the fetcher. A cache failure must never fail a fetch: callers
/// degrade load errors to misses and save errors to warnings.
#[async_trait::async_trait]
pub trait UrlCachePort: Send + Sync {
    /// Loads the cached URL list for a key.
    /// Returns `Ok(None)` when the key has no entry.
    async fn load(&self, key: &str) -> CacheResult<Option<Vec<ImageUrl>>>;

    /// Stores a URL list under a key, replacing any previous entry.
    async fn save(&self, key: &str, urls: &[ImageUrl]) -> CacheResult<()>;
}
