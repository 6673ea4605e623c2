//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AccountName, FetchLimit, ImageUrl, MediaCursor, MediaItem, MediaPage, Rendition};
pub use errors::FetchError;
pub use ports::{MediaListingPort, UrlCachePort};
