//! Selected image URL value object.

use serde::{Deserialize, Serialize};

/// URL of the rendition selected for one media item.
///
/// This is the unit stored in the final result list and in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Creates a new `ImageUrl` from any string-like input.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the URL as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageUrl {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageUrl {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
