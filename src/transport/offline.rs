//! Built-in sample feed, for working without spending API quota.

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{NewsPage, RawArticle};
use crate::transport::{ArticleTransport, PageRequest};

#[derive(Debug, Clone)]
pub struct OfflineTransport {
    articles: Vec<RawArticle>,
}

impl Default for OfflineTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl OfflineTransport {
    pub fn new() -> Self {
        Self::with_articles(sample_articles())
    }

    pub fn with_articles(articles: Vec<RawArticle>) -> Self {
        Self { articles }
    }

    fn matches(article: &RawArticle, needle: &str) -> bool {
        [&article.title, &article.description]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(needle))
    }
}

#[async_trait]
impl ArticleTransport for OfflineTransport {
    async fn fetch_page(&self, request: &PageRequest) -> Result<NewsPage> {
        let articles = match request {
            PageRequest::Browse { page_size, .. } => self
                .articles
                .iter()
                .take(*page_size as usize)
                .cloned()
                .collect(),
            PageRequest::Search { query, page_size } => {
                let needle = query.trim().to_lowercase();
                self.articles
                    .iter()
                    .filter(|a| Self::matches(a, &needle))
                    .take(*page_size as usize)
                    .cloned()
                    .collect()
            }
        };
        Ok(NewsPage::new(articles, None))
    }
}

fn sample(
    id: &str,
    title: &str,
    description: &str,
    media_url: Option<&str>,
    source: &str,
    published_at: &str,
) -> RawArticle {
    RawArticle {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        source_name: Some(source.to_string()),
        published_at: Some(published_at.to_string()),
        media_url: media_url.map(String::from),
        description: Some(description.to_string()),
    }
}

pub fn sample_articles() -> Vec<RawArticle> {
    vec![
        sample(
            "1",
            "Breaking News: Rust Takes Over",
            "Developers around the world are switching to Rust for systems work.",
            Some("https://images.unsplash.com/photo-1728044849248-e90f3ec6a889"),
            "Tech Daily",
            "2025-03-20T09:00:00",
        ),
        sample(
            "2",
            "AI Revolution in 2025 is transforming industries",
            "Artificial Intelligence is transforming industries faster than expected.",
            Some("https://images.unsplash.com/photo-1742147550712-9c25dc0832aa"),
            "AI News",
            "2025-03-19T16:45:00",
        ),
        sample(
            "3",
            "New Reusable Rocket Launches",
            "A reusable rocket completed its first orbital flight.",
            Some("https://images.unsplash.com/photo-1742144897659-8a3e8a0a090c"),
            "Space Journal",
            "2025-03-18T11:20:00",
        ),
        sample(
            "4",
            "No Image News Sample from the world",
            "",
            None,
            "News TV",
            "2025-01-01T00:00:00",
        ),
    ]
}
