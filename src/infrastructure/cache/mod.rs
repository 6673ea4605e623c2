//! URL list cache adapters.
//!
//! This module provides:
//! - Memory caching with LRU eviction
//! - File-backed caching for persistence across processes

pub mod file_cache;
pub mod memory_cache;

pub use file_cache::FileUrlCache;
pub use memory_cache::{CacheStats, MemoryUrlCache};
