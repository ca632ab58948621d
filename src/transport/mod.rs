pub mod http_transport;
pub mod offline;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::NewsPage;

pub const DEFAULT_PAGE_SIZE: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Latest news, continuing from `cursor` (first page when `None`)
    Browse {
        cursor: Option<String>,
        page_size: u32,
    },
    /// Keyword search, single page
    Search { query: String, page_size: u32 },
}

impl PageRequest {
    pub fn is_search(&self) -> bool {
        matches!(self, PageRequest::Search { .. })
    }
}

#[async_trait]
pub trait ArticleTransport {
    async fn fetch_page(&self, request: &PageRequest) -> Result<NewsPage>;
}
