use crate::types::Article;
use crate::Result;
use async_trait::async_trait;

/// Read-only access to the on-disk content tree. Categories are the
/// immediate subdirectories of the store root; articles are the JSON
/// files inside them, keyed by slug.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Category names in deterministic (sorted) order.
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// Slugs of the articles in a category, sorted.
    async fn list_article_files(&self, category: &str) -> Result<Vec<String>>;

    /// Load and validate the full document for `(category, slug)`.
    async fn read_article(&self, category: &str, slug: &str) -> Result<Article>;
}
