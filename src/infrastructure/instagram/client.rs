//! Instagram media listing HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::MediaListingResponse;
use crate::domain::entities::{AccountName, MediaCursor, MediaPage};
use crate::domain::errors::FetchError;
use crate::domain::ports::MediaListingPort;

const INSTAGRAM_BASE_URL: &str = "https://www.instagram.com";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Instagram media listing client.
pub struct InstagramMediaClient {
    client: Client,
    base_url: String,
}

impl InstagramMediaClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(INSTAGRAM_BASE_URL)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| FetchError::remote_fetch(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn listing_url(&self, account: &AccountName) -> String {
        format!("{}/{}/media/", self.base_url, account.as_str())
    }
}

#[async_trait]
impl MediaListingPort for InstagramMediaClient {
    async fn fetch_page(
        &self,
        account: &AccountName,
        cursor: Option<&MediaCursor>,
    ) -> Result<MediaPage, FetchError> {
        let url = self.listing_url(account);

        debug!(account = %account, cursor = ?cursor.map(MediaCursor::as_str), "Fetching media listing page");

        let mut request = self.client.get(&url);
        if let Some(cursor) = cursor {
            request = request.query(&[("max_id", cursor.as_str())]);
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach media listing endpoint");
            if e.is_timeout() {
                FetchError::remote_fetch("request timed out")
            } else if e.is_connect() {
                FetchError::remote_fetch("failed to connect to listing endpoint")
            } else {
                FetchError::remote_fetch(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            return Err(error_for_status(account, status));
        }

        let listing: MediaListingResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse media listing response");
            if e.is_decode() {
                FetchError::remote_parse(format!("unexpected listing body: {e}"))
            } else {
                FetchError::remote_fetch(format!("failed to read listing body: {e}"))
            }
        })?;

        Ok(listing.into())
    }
}

fn error_for_status(account: &AccountName, status: StatusCode) -> FetchError {
    match status {
        StatusCode::NOT_FOUND => {
            FetchError::remote_fetch(format!("no media listing for account {account}"))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            FetchError::remote_fetch("rate limited by listing endpoint")
        }
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            FetchError::remote_fetch("listing endpoint is temporarily unavailable")
        }
        _ => FetchError::remote_fetch(format!("unexpected response: {status}")),
    }
}
