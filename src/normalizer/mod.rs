use crate::domain::{Article, RawArticle};

pub const DEFAULT_TITLE: &str = "No Title";
pub const DEFAULT_SOURCE: &str = "Unknown Source";

/// Turns partial API records into well-formed [`Article`]s.
///
/// Never fails: missing fields are filled with defaults.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, raw: RawArticle) -> Article {
        let id = raw
            .id
            .unwrap_or_else(|| Self::derive_id(raw.title.as_deref(), raw.published_at.as_deref()));
        let is_featured = raw.media_url.is_some();

        Article {
            id,
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            source_name: raw.source_name.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            published_at: raw.published_at.unwrap_or_default(),
            media_url: raw.media_url,
            description: raw.description.unwrap_or_default(),
            is_featured,
        }
    }

    pub fn normalize_page(&self, raw: Vec<RawArticle>) -> Vec<Article> {
        raw.into_iter().map(|r| self.normalize(r)).collect()
    }

    /// Identity for records without one: the same title and date always map to the same id.
    pub fn derive_id(title: Option<&str>, published_at: Option<&str>) -> String {
        format!("{}-{}", title.unwrap_or(""), published_at.unwrap_or(""))
    }
}
