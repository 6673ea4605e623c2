//! Domain entity definitions.

mod account;
mod image_url;
mod limit;
mod media;

pub use account::AccountName;
pub use image_url::ImageUrl;
pub use limit::FetchLimit;
pub use media::{MediaCursor, MediaItem, MediaPage, Rendition};
