//! Infrastructure layer with external service adapters.

/// URL list cache adapters.
pub mod cache;
/// Application configuration.
pub mod config;
/// Instagram listing endpoint adapter.
pub mod instagram;

pub use cache::{CacheStats, FileUrlCache, MemoryUrlCache};
pub use config::{CliArgs, LogLevel};
pub use instagram::InstagramMediaClient;
