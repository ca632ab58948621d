use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::app::Result;
use crate::domain::{Article, NewsPage};
use crate::feed::state::{FeedSnapshot, FeedState};
use crate::normalizer::Normalizer;
use crate::transport::{ArticleTransport, PageRequest};

/// What a single fetch attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Not issued: another fetch was in flight, or the controller is closed
    Skipped,
    /// Browse page appended to the feed
    Appended(usize),
    /// Search results replaced the feed
    Replaced(usize),
    /// Transport failed; feed left untouched
    Failed,
    /// Result arrived after the controller was closed and was dropped
    Discarded,
}

/// Owns the news feed: accumulated articles, search query, pagination
/// cursor, loading flag and bookmarks.
///
/// All state lives behind one lock that is never held across the transport
/// call, so bookmark and query changes go through while a page is loading.
/// At most one fetch is in flight at any time.
pub struct FeedController {
    transport: Arc<dyn ArticleTransport + Send + Sync>,
    normalizer: Normalizer,
    page_size: u32,
    state: Mutex<FeedState>,
    updates: watch::Sender<FeedSnapshot>,
}

impl FeedController {
    pub fn new(transport: Arc<dyn ArticleTransport + Send + Sync>, page_size: u32) -> Self {
        let (updates, _) = watch::channel(FeedSnapshot::default());
        Self {
            transport,
            normalizer: Normalizer::new(),
            page_size,
            state: Mutex::new(FeedState::default()),
            updates,
        }
    }

    /// Receiver that always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.lock().snapshot()
    }

    pub fn articles(&self) -> Vec<Article> {
        self.lock().articles.clone()
    }

    pub fn bookmarks(&self) -> Vec<Article> {
        self.lock().bookmarks.as_slice().to_vec()
    }

    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    pub fn cursor(&self) -> Option<String> {
        self.lock().cursor.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.lock().bookmarks.contains(id)
    }

    /// Article by id from the current feed, or from bookmarks once it has scrolled away.
    pub fn find_article(&self, id: &str) -> Option<Article> {
        let state = self.lock();
        state
            .articles
            .iter()
            .find(|a| a.id == id)
            .or_else(|| state.bookmarks.get(id))
            .cloned()
    }

    /// Update the search query. Does not fetch.
    pub fn set_query(&self, text: impl Into<String>) {
        let mut state = self.lock();
        state.query = text.into();
        self.publish(&state);
    }

    /// Flip bookmark membership for `article`. Returns true if it is bookmarked afterwards.
    pub fn toggle_bookmark(&self, article: &Article) -> bool {
        let mut state = self.lock();
        let bookmarked = state.bookmarks.toggle(article);
        debug!(id = %article.id, bookmarked, "Toggled bookmark");
        self.publish(&state);
        bookmarked
    }

    /// Load one more page: search results replace the feed, browse pages are appended.
    pub async fn fetch_next_page(&self) -> FetchOutcome {
        let Some(request) = self.begin_fetch() else {
            debug!("Fetch skipped");
            return FetchOutcome::Skipped;
        };
        let guard = LoadingGuard {
            controller: self,
            armed: true,
        };

        debug!(?request, "Fetching news page");
        let result = self.transport.fetch_page(&request).await;
        self.complete(guard, &request, result)
    }

    /// Drop accumulated articles and cursor, then fetch the first page for the current query.
    pub async fn refresh(&self) -> FetchOutcome {
        {
            let mut state = self.lock();
            if state.closed {
                return FetchOutcome::Skipped;
            }
            state.cursor = None;
            state.articles.clear();
            self.publish(&state);
        }
        self.fetch_next_page().await
    }

    /// Infinite scroll: fetch more once the last loaded article becomes visible.
    pub async fn on_item_visible(&self, index: usize) -> FetchOutcome {
        let at_end = {
            let state = self.lock();
            !state.is_loading && index + 1 >= state.articles.len()
        };
        if at_end {
            self.fetch_next_page().await
        } else {
            FetchOutcome::Skipped
        }
    }

    /// Tear down: later fetches are refused and in-flight results are discarded.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        self.publish(&state);
    }

    /// Admission check and loading flag in one critical section.
    fn begin_fetch(&self) -> Option<PageRequest> {
        let mut state = self.lock();
        if state.closed || state.is_loading {
            return None;
        }

        let request = match state.search_query() {
            Some(query) => PageRequest::Search {
                query: query.to_string(),
                page_size: self.page_size,
            },
            None => PageRequest::Browse {
                cursor: state.cursor.clone(),
                page_size: self.page_size,
            },
        };

        state.is_loading = true;
        self.publish(&state);
        Some(request)
    }

    fn complete(
        &self,
        guard: LoadingGuard<'_>,
        request: &PageRequest,
        result: Result<NewsPage>,
    ) -> FetchOutcome {
        let page = match result {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, ?request, "Failed to fetch news page");
                return guard.release(|state| {
                    if state.closed {
                        FetchOutcome::Discarded
                    } else {
                        FetchOutcome::Failed
                    }
                });
            }
        };

        let next_cursor = page.next_cursor.clone();
        let total = page.total_results;
        let articles = self.normalizer.normalize_page(page.into_articles());
        let count = articles.len();

        guard.release(|state| {
            if state.closed {
                warn!(count, "Discarding news page received after close");
                return FetchOutcome::Discarded;
            }
            if request.is_search() {
                state.articles = articles;
                info!(count, total, "Loaded search results");
                FetchOutcome::Replaced(count)
            } else {
                state.articles.extend(articles);
                state.cursor = next_cursor;
                info!(count, total, has_more = state.cursor.is_some(), "Loaded news page");
                FetchOutcome::Appended(count)
            }
        })
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &FeedState) {
        self.updates.send_replace(state.snapshot());
    }
}

/// Clears the loading flag when a fetch ends, including when its future is dropped.
struct LoadingGuard<'a> {
    controller: &'a FeedController,
    armed: bool,
}

impl LoadingGuard<'_> {
    /// Apply `f` and clear the loading flag in the same critical section.
    fn release<R>(mut self, f: impl FnOnce(&mut FeedState) -> R) -> R {
        self.armed = false;
        let mut state = self.controller.lock();
        let out = f(&mut *state);
        state.is_loading = false;
        self.controller.publish(&state);
        out
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            debug!("Fetch abandoned before completion");
            let mut state = self.controller.lock();
            state.is_loading = false;
            self.controller.publish(&state);
        }
    }
}
