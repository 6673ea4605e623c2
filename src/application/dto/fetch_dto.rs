//! Fetch DTOs.

use crate::domain::entities::ImageUrl;

/// Image fetch request data.
#[derive(Debug, Clone)]
pub struct FetchImagesRequest {
    /// Account whose media listing to walk.
    pub account: String,
    /// Maximum number of URLs to return; 0 means no cap.
    pub limit: u32,
}

impl FetchImagesRequest {
    /// Creates new fetch request.
    #[must_use]
    pub const fn new(account: String, limit: u32) -> Self {
        Self { account, limit }
    }
}

/// Image fetch response data.
#[derive(Debug, Clone)]
pub struct FetchImagesResponse {
    /// Selected image URLs, newest first.
    pub urls: Vec<ImageUrl>,
    /// Whether the list was served from the cache.
    pub from_cache: bool,
}

impl FetchImagesResponse {
    /// Creates new fetch response.
    #[must_use]
    pub const fn new(urls: Vec<ImageUrl>, from_cache: bool) -> Self {
        Self { urls, from_cache }
    }
}
