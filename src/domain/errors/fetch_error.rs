//! Fetch error types.

use thiserror::Error;

/// Fetch error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("invalid account name: {reason}")]
    InvalidAccount { reason: String },

    #[error("remote listing fetch failed: {message}")]
    RemoteFetch { message: String },

    #[error("remote listing response malformed: {message}")]
    RemoteParse { message: String },
}

impl FetchError {
    /// Creates invalid account error.
    #[must_use]
    pub fn invalid_account(reason: impl Into<String>) -> Self {
        Self::InvalidAccount {
            reason: reason.into(),
        }
    }

    /// Creates remote fetch error.
    #[must_use]
    pub fn remote_fetch(message: impl Into<String>) -> Self {
        Self::RemoteFetch {
            message: message.into(),
        }
    }

    /// Creates remote parse error.
    #[must_use]
    pub fn remote_parse(message: impl Into<String>) -> Self {
        Self::RemoteParse {
            message: message.into(),
        }
    }

    /// Returns whether the error originated at the remote source.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteFetch { .. } | Self::RemoteParse { .. })
    }
}
