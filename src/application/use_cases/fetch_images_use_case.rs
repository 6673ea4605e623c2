//! Image URL fetch use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{FetchImagesRequest, FetchImagesResponse};
use crate::domain::entities::{AccountName, FetchLimit, ImageUrl};
use crate::domain::errors::FetchError;
use crate::domain::ports::{MediaListingPort, UrlCachePort};

/// Cache key prefix, kept distinct from anything else sharing the store.
const CACHE_NAMESPACE: &str = "instagram_element_images";

/// Fetches an account's image URLs through a write-through cache.
#[derive(Clone)]
pub struct FetchImagesUseCase {
    listing: Arc<dyn MediaListingPort>,
    cache: Arc<dyn UrlCachePort>,
}

impl FetchImagesUseCase {
    /// Creates new fetch use case.
    #[must_use]
    pub fn new(listing: Arc<dyn MediaListingPort>, cache: Arc<dyn UrlCachePort>) -> Self {
        Self { listing, cache }
    }

    /// Executes the fetch for the requested account and limit.
    ///
    /// Returns the cached list when one exists for the (account, limit)
    /// pair, without touching the remote source. Otherwise walks the
    /// paginated listing, selects the widest rendition per item, orders the
    /// result newest first, truncates it to the limit and persists it before
    /// returning.
    ///
    /// # Errors
    /// Returns error if the account name is invalid or a page fetch fails.
    /// Cache failures never fail the call: a load failure counts as a miss
    /// and a save failure leaves the result uncached.
    pub async fn execute(
        &self,
        request: FetchImagesRequest,
    ) -> Result<FetchImagesResponse, FetchError> {
        let account = AccountName::new(request.account.as_str()).ok_or_else(|| {
            warn!("Invalid account name provided");
            FetchError::invalid_account("account must be non-empty without URL metacharacters")
        })?;
        let limit = FetchLimit::new(request.limit);

        let key = cache_key(&account, limit);

        match self.cache.load(&key).await {
            Ok(Some(urls)) => {
                debug!(key = %key, count = urls.len(), "Cache hit, skipping remote fetch");
                return Ok(FetchImagesResponse::new(urls, true));
            }
            Ok(None) => {
                debug!(key = %key, "Cache miss");
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Cache load failed, treating as miss");
            }
        }

        let urls = self.fetch_all(&account, limit).await?;

        if let Err(e) = self.cache.save(&key, &urls).await {
            warn!(key = %key, error = %e, "Cache write failed, returning uncached result");
        }

        info!(account = %account, count = urls.len(), "Fetched image URLs");

        Ok(FetchImagesResponse::new(urls, false))
    }

    /// Walks the listing pages and accumulates selected image URLs.
    async fn fetch_all(
        &self,
        account: &AccountName,
        limit: FetchLimit,
    ) -> Result<Vec<ImageUrl>, FetchError> {
        let effective_limit = limit.effective();
        let mut urls = Vec::new();
        let mut cursor = None;

        loop {
            let page = self.listing.fetch_page(account, cursor.as_ref()).await?;
            let next_cursor = page.next_cursor();

            debug!(
                account = %account,
                items = page.items.len(),
                more_available = page.more_available,
                "Fetched listing page"
            );

            for item in &page.items {
                if let Some(rendition) = item.largest_rendition() {
                    urls.push(ImageUrl::new(rendition.url.clone()));
                }
            }

            // Continuing needs all three: the source promising more pages, a
            // cursor to address the next one, and room left under the limit.
            match next_cursor {
                Some(next) if page.more_available && urls.len() < effective_limit => {
                    cursor = Some(next);
                }
                _ => break,
            }
        }

        // Pages accumulate in fetch order; the caller contract is newest
        // first.
        urls.reverse();
        urls.truncate(effective_limit);

        Ok(urls)
    }
}

/// Derives the cache key from the raw request values.
///
/// The raw limit goes into the key, never the resolved sentinel, so limit 0
/// and an explicit large limit resolve to different entries.
fn cache_key(account: &AccountName, limit: FetchLimit) -> String {
    format!("{CACHE_NAMESPACE}_{}_{}", account.as_str(), limit.raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MediaItem, MediaPage, Rendition};
    use crate::domain::ports::mocks::{MockListingPort, MockUrlCache};

    fn item(id: &str, widths: &[u32]) -> MediaItem {
        let renditions = widths
            .iter()
            .map(|w| Rendition::new(*w, format!("https://cdn.example/{id}_{w}.jpg")))
            .collect();
        MediaItem::new(id, renditions)
    }

    fn page_of(ids: std::ops::Range<u32>, more_available: bool) -> MediaPage {
        let items = ids
            .map(|id| item(&id.to_string(), &[320, 640]))
            .collect();
        MediaPage::new(items, more_available)
    }

    fn use_case(
        listing: Arc<MockListingPort>,
        cache: Arc<MockUrlCache>,
    ) -> FetchImagesUseCase {
        FetchImagesUseCase::new(listing, cache)
    }

    #[tokio::test]
    async fn test_cache_hit_short_circuits_remote_fetch() {
        let cached = vec![ImageUrl::new("https://cdn.example/cached.jpg")];
        let listing = Arc::new(MockListingPort::new(vec![page_of(0..3, false)]));
        let cache = Arc::new(MockUrlCache::with_entry(
            "instagram_element_images_alice_10",
            cached.clone(),
        ));

        let response = use_case(listing.clone(), cache)
            .execute(FetchImagesRequest::new("alice".to_string(), 10))
            .await
            .unwrap();

        assert!(response.from_cache);
        assert_eq!(response.urls, cached);
        assert_eq!(listing.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_two_page_walk_caches_newest_first() {
        // Page 1: 6 items ending in id 100, page 2 fetched with cursor=100.
        let page1 = MediaPage::new(
            (1..=6).map(|i| item(&format!("{}", 100 + 6 - i), &[640])).collect(),
            true,
        );
        let page2 = MediaPage::new(
            (1..=4).map(|i| item(&format!("{}", 90 - i), &[640])).collect(),
            false,
        );
        let listing = Arc::new(MockListingPort::new(vec![page1, page2]));
        let cache = Arc::new(MockUrlCache::new());

        let response = use_case(listing.clone(), cache.clone())
            .execute(FetchImagesRequest::new("alice".to_string(), 10))
            .await
            .unwrap();

        assert!(!response.from_cache);
        assert_eq!(listing.fetch_count(), 2);
        assert_eq!(listing.cursors_seen(), vec![None, Some("100".to_string())]);
        assert_eq!(response.urls.len(), 10);
        // Reversal puts the last accumulated URL first.
        assert_eq!(response.urls[0].as_str(), "https://cdn.example/86_640.jpg");
        assert_eq!(
            cache.entry("instagram_element_images_alice_10"),
            Some(response.urls.clone())
        );
    }

    #[tokio::test]
    async fn test_terminates_when_no_more_available() {
        // Limit far above what the source holds.
        let listing = Arc::new(MockListingPort::new(vec![
            page_of(0..5, true),
            page_of(5..10, false),
        ]));
        let cache = Arc::new(MockUrlCache::new());

        let response = use_case(listing.clone(), cache)
            .execute(FetchImagesRequest::new("alice".to_string(), 100))
            .await
            .unwrap();

        assert_eq!(listing.fetch_count(), 2);
        assert_eq!(response.urls.len(), 10);
    }

    #[tokio::test]
    async fn test_truncates_to_effective_limit() {
        let listing = Arc::new(MockListingPort::new(vec![page_of(0..12, false)]));
        let cache = Arc::new(MockUrlCache::new());

        let response = use_case(listing, cache)
            .execute(FetchImagesRequest::new("alice".to_string(), 5))
            .await
            .unwrap();

        assert_eq!(response.urls.len(), 5);
        // First five of the reversed sequence: items 11 down to 7.
        assert_eq!(response.urls[0].as_str(), "https://cdn.example/11_640.jpg");
        assert_eq!(response.urls[4].as_str(), "https://cdn.example/7_640.jpg");
    }

    #[tokio::test]
    async fn test_limit_stops_pagination_early() {
        let listing = Arc::new(MockListingPort::new(vec![
            page_of(0..5, true),
            page_of(5..10, true),
            page_of(10..15, true),
        ]));
        let cache = Arc::new(MockUrlCache::new());

        let response = use_case(listing.clone(), cache)
            .execute(FetchImagesRequest::new("alice".to_string(), 7))
            .await
            .unwrap();

        // 5 after page one, 10 >= 7 after page two; page three never fetched.
        assert_eq!(listing.fetch_count(), 2);
        assert_eq!(response.urls.len(), 7);
    }

    #[tokio::test]
    async fn test_unbounded_limit_walks_to_exhaustion() {
        let listing = Arc::new(MockListingPort::new(vec![
            page_of(0..5, true),
            page_of(5..10, true),
            page_of(10..15, false),
        ]));
        let cache = Arc::new(MockUrlCache::new());

        let response = use_case(listing.clone(), cache)
            .execute(FetchImagesRequest::new("alice".to_string(), 0))
            .await
            .unwrap();

        assert_eq!(listing.fetch_count(), 3);
        assert_eq!(response.urls.len(), 15);
    }

    #[tokio::test]
    async fn test_limit_zero_and_explicit_limit_use_distinct_keys() {
        let cache = Arc::new(MockUrlCache::new());
        let fetcher = use_case(
            Arc::new(MockListingPort::new(vec![
                page_of(0..3, false),
                page_of(0..3, false),
            ])),
            cache.clone(),
        );

        fetcher
            .execute(FetchImagesRequest::new("alice".to_string(), 0))
            .await
            .unwrap();
        fetcher
            .execute(FetchImagesRequest::new("alice".to_string(), 25))
            .await
            .unwrap();

        assert_eq!(
            cache.saved_keys(),
            vec![
                "instagram_element_images_alice_0".to_string(),
                "instagram_element_images_alice_25".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_item_without_renditions_contributes_nothing() {
        let page = MediaPage::new(
            vec![item("1", &[640]), item("2", &[]), item("3", &[640])],
            false,
        );
        let listing = Arc::new(MockListingPort::new(vec![page]));
        let cache = Arc::new(MockUrlCache::new());

        let response = use_case(listing, cache)
            .execute(FetchImagesRequest::new("alice".to_string(), 0))
            .await
            .unwrap();

        assert_eq!(response.urls.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_first_page_yields_empty_result() {
        let listing = Arc::new(MockListingPort::new(vec![MediaPage::new(
            Vec::new(),
            true,
        )]));
        let cache = Arc::new(MockUrlCache::new());

        let response = use_case(listing.clone(), cache.clone())
            .execute(FetchImagesRequest::new("alice".to_string(), 10))
            .await
            .unwrap();

        // No items means no cursor; the claimed more_available is moot.
        assert_eq!(listing.fetch_count(), 1);
        assert!(response.urls.is_empty());
        assert_eq!(
            cache.entry("instagram_element_images_alice_10"),
            Some(Vec::new())
        );
    }

    #[tokio::test]
    async fn test_cache_load_failure_degrades_to_miss() {
        let listing = Arc::new(MockListingPort::new(vec![page_of(0..3, false)]));
        let cache = Arc::new(MockUrlCache::new());
        cache.set_fail_loads(true);

        let response = use_case(listing.clone(), cache)
            .execute(FetchImagesRequest::new("alice".to_string(), 10))
            .await
            .unwrap();

        assert!(!response.from_cache);
        assert_eq!(listing.fetch_count(), 1);
        assert_eq!(response.urls.len(), 3);
    }

    #[tokio::test]
    async fn test_cache_save_failure_still_returns_result() {
        let listing = Arc::new(MockListingPort::new(vec![page_of(0..3, false)]));
        let cache = Arc::new(MockUrlCache::new());
        cache.set_fail_saves(true);

        let response = use_case(listing, cache.clone())
            .execute(FetchImagesRequest::new("alice".to_string(), 10))
            .await
            .unwrap();

        assert_eq!(response.urls.len(), 3);
        assert!(cache.entry("instagram_element_images_alice_10").is_none());
    }

    #[tokio::test]
    async fn test_remote_failure_leaves_cache_untouched() {
        let listing = Arc::new(MockListingPort::failing());
        let cache = Arc::new(MockUrlCache::new());

        let result = use_case(listing, cache.clone())
            .execute(FetchImagesRequest::new("alice".to_string(), 10))
            .await;

        assert!(matches!(result, Err(FetchError::RemoteFetch { .. })));
        assert!(cache.saved_keys().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_account_is_rejected_before_any_io() {
        let listing = Arc::new(MockListingPort::new(Vec::new()));
        let cache = Arc::new(MockUrlCache::new());

        let result = use_case(listing.clone(), cache.clone())
            .execute(FetchImagesRequest::new("  ".to_string(), 10))
            .await;

        assert!(matches!(result, Err(FetchError::InvalidAccount { .. })));
        assert_eq!(listing.fetch_count(), 0);
        assert!(cache.loaded_keys().is_empty());
    }
}
