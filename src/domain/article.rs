use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

const DISPLAY_FORMAT: &str = "%B %d, %Y at %I:%M %p";
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub source_name: String,
    pub published_at: String,
    pub media_url: Option<String>,
    pub description: String,
    pub is_featured: bool,
}

impl Article {
    /// Article-shaped raw record, used to feed an article back through the normalizer.
    pub fn to_raw(&self) -> RawArticle {
        RawArticle {
            id: Some(self.id.clone()),
            title: Some(self.title.clone()),
            source_name: Some(self.source_name.clone()),
            published_at: Some(self.published_at.clone()),
            media_url: self.media_url.clone(),
            description: Some(self.description.clone()),
        }
    }

    pub fn has_image(&self) -> bool {
        self.media_url.is_some()
    }

    /// Human readable publication date, e.g. "March 20, 2025 at 02:30 PM".
    ///
    /// Values that don't parse as a date-time are returned as-is.
    pub fn display_published_at(&self) -> String {
        parse_published_at(&self.published_at)
            .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| self.published_at.clone())
    }
}

fn parse_published_at(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Article record as delivered by the news API. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "source_title")]
    pub source_name: Option<String>,
    #[serde(default, rename = "pub_date")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One page of the news API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPage {
    #[serde(default, rename = "data")]
    pub articles: Option<Vec<RawArticle>>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub per_page: u32,
}

impl NewsPage {
    pub fn new(articles: Vec<RawArticle>, next_cursor: Option<String>) -> Self {
        let count = articles.len();
        Self {
            articles: Some(articles),
            next_cursor,
            total_results: count as u64,
            per_page: count as u32,
        }
    }

    /// Raw articles of the page; a `null` data field is an empty page.
    pub fn into_articles(self) -> Vec<RawArticle> {
        self.articles.unwrap_or_default()
    }
}
