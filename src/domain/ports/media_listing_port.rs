//! Port definition for the paginated media listing source.

use async_trait::async_trait;

use crate::domain::entities::{AccountName, MediaCursor, MediaPage};
use crate::domain::errors::FetchError;

/// Port for fetching pages of an account's media listing.
///
/// Implementations perform exactly one remote round trip per call, with no
/// retry and no backoff; transport and parse failures surface as
/// [`FetchError`] and abort the caller's current fetch.
#[async_trait]
pub trait MediaListingPort: Send + Sync {
    /// Fetches the page addressed by `cursor`, or the first page when the
    /// cursor is absent.
    async fn fetch_page(
        &self,
        account: &AccountName,
        cursor: Option<&MediaCursor>,
    ) -> Result<MediaPage, FetchError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Scripted listing port serving a fixed page sequence for tests.
    ///
    /// Records the cursor of every call; once the script runs out it serves
    /// empty exhausted pages.
    pub struct MockListingPort {
        pages: Mutex<VecDeque<MediaPage>>,
        cursors_seen: Mutex<Vec<Option<String>>>,
        fetch_count: AtomicUsize,
        fail: AtomicBool,
    }

    impl MockListingPort {
        /// Creates a mock serving the given pages in order.
        pub fn new(pages: Vec<MediaPage>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                cursors_seen: Mutex::new(Vec::new()),
                fetch_count: AtomicUsize::new(0),
                fail: AtomicBool::new(false),
            }
        }

        /// Creates a mock that fails every fetch.
        pub fn failing() -> Self {
            let mock = Self::new(Vec::new());
            mock.fail.store(true, Ordering::SeqCst);
            mock
        }

        /// Returns how many pages were requested.
        pub fn fetch_count(&self) -> usize {
            self.fetch_count.load(Ordering::SeqCst)
        }

        /// Returns the cursor of every call, in call order.
        pub fn cursors_seen(&self) -> Vec<Option<String>> {
            self.cursors_seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MediaListingPort for MockListingPort {
        async fn fetch_page(
            &self,
            _account: &AccountName,
            cursor: Option<&MediaCursor>,
        ) -> Result<MediaPage, FetchError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            self.cursors_seen
                .lock()
                .unwrap()
                .push(cursor.map(|c| c.as_str().to_string()));

            if self.fail.load(Ordering::SeqCst) {
                return Err(FetchError::remote_fetch("mock transport failure"));
            }

            Ok(self
                .pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| MediaPage::new(Vec::new(), false)))
        }
    }
}
