//! File-backed URL list cache for persistence across processes.

use std::path::PathBuf;

use sha2::{Digest, Sha256};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

use crate::domain::entities::ImageUrl;
use crate::domain::ports::{CacheError, CacheResult, UrlCachePort};

/// File-backed cache that persists one JSON document per key.
///
/// Entries survive process restarts. Expiry and cleanup are left to whatever
/// owns the cache directory; this adapter never deletes entries on its own.
pub struct FileUrlCache {
    cache_dir: PathBuf,
}

impl FileUrlCache {
    /// Creates a cache rooted at the given directory.
    ///
    /// # Errors
    /// Returns error if the cache directory cannot be created.
    pub async fn new(cache_dir: PathBuf) -> CacheResult<Self> {
        fs::create_dir_all(&cache_dir)
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to create cache dir: {e}")))?;

        Ok(Self { cache_dir })
    }

    /// Creates a cache in the default location (~/.cache/instafetch/urls/).
    ///
    /// # Errors
    /// Returns error if the cache directory cannot be created.
    pub async fn default_location() -> CacheResult<Self> {
        Self::new(dirs_cache_path()).await
    }

    /// Returns the file backing a key.
    ///
    /// Keys embed caller-supplied account names, so the filename is a hash
    /// of the key rather than the key itself.
    fn entry_path(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let digest = hasher.finalize();
        self.cache_dir.join(format!("{}.json", hex::encode(&digest[..16])))
    }
}

#[async_trait::async_trait]
impl UrlCachePort for FileUrlCache {
    async fn load(&self, key: &str) -> CacheResult<Option<Vec<ImageUrl>>> {
        let path = self.entry_path(key);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                trace!(key = %key, "File cache miss");
                return Ok(None);
            }
            Err(e) => {
                return Err(CacheError::IoError(format!(
                    "Failed to read cache entry: {e}"
                )));
            }
        };

        let urls = serde_json::from_slice(&bytes)
            .map_err(|e| CacheError::DecodeError(format!("Corrupt cache entry: {e}")))?;

        trace!(key = %key, path = %path.display(), "File cache hit");
        Ok(Some(urls))
    }

    async fn save(&self, key: &str, urls: &[ImageUrl]) -> CacheResult<()> {
        let path = self.entry_path(key);

        let bytes = serde_json::to_vec(urls)
            .map_err(|e| CacheError::DecodeError(format!("Failed to encode entry: {e}")))?;

        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to create cache file: {e}")))?;

        file.write_all(&bytes)
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to write cache file: {e}")))?;

        file.flush()
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to flush cache file: {e}")))?;

        debug!(key = %key, path = %path.display(), count = urls.len(), "Stored URL list in file cache");

        Ok(())
    }
}

/// Returns the default cache directory path.
fn dirs_cache_path() -> PathBuf {
    directories::ProjectDirs::from("com", "linuxmobile", "instafetch").map_or_else(
        || std::env::temp_dir().join("instafetch").join("cache").join("urls"),
        |dirs| dirs.cache_dir().join("urls"),
    )
}
