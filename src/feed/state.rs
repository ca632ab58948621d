use crate::domain::Article;
use crate::feed::Bookmarks;

/// Mutable feed state, only ever touched through [`FeedController`](crate::feed::FeedController).
#[derive(Debug, Default)]
pub(crate) struct FeedState {
    pub articles: Vec<Article>,
    pub query: String,
    pub cursor: Option<String>,
    pub is_loading: bool,
    pub bookmarks: Bookmarks,
    pub closed: bool,
}

impl FeedState {
    /// Search mode is any query with visible characters.
    pub fn search_query(&self) -> Option<&str> {
        let query = self.query.trim();
        (!query.is_empty()).then_some(query)
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            articles: self.articles.clone(),
            bookmarks: self.bookmarks.as_slice().to_vec(),
            query: self.query.clone(),
            cursor: self.cursor.clone(),
            is_loading: self.is_loading,
        }
    }
}

/// Read-only view of the feed, published to subscribers on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub articles: Vec<Article>,
    pub bookmarks: Vec<Article>,
    pub query: String,
    pub cursor: Option<String>,
    pub is_loading: bool,
}

impl FeedSnapshot {
    pub fn is_search(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|a| a.id == id)
    }
}
