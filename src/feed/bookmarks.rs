use crate::domain::Article;

/// Bookmarked articles, keyed by article id, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    entries: Vec<Article>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `article`'s id. Returns true if it is bookmarked afterwards.
    pub fn toggle(&mut self, article: &Article) -> bool {
        if self.contains(&article.id) {
            self.entries.retain(|a| a.id != article.id);
            false
        } else {
            self.entries.push(article.clone());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|a| a.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Article] {
        &self.entries
    }
}
