use futures::future::join_all;
use parish_core::{ContentStore, Error, IndexEntry, Result};
use tracing::{debug, warn};

/// Scans every category of the store and produces the public listing,
/// sorted by publication date descending. Equal dates keep enumeration
/// order (the sort is stable).
///
/// A corrupt or unreadable file is skipped with a warning so that one
/// bad document degrades the listing instead of taking it down; only a
/// store-level failure aborts.
pub async fn build_index(store: &dyn ContentStore) -> Result<Vec<IndexEntry>> {
    let mut dated = Vec::new();

    for category in store.list_categories().await? {
        let slugs = match store.list_article_files(&category).await {
            Ok(slugs) => slugs,
            Err(Error::StoreUnavailable(msg)) => return Err(Error::StoreUnavailable(msg)),
            Err(e) => {
                warn!(category = %category, error = %e, "skipping unreadable category");
                continue;
            }
        };

        let reads = slugs
            .iter()
            .map(|slug| store.read_article(&category, slug));
        for (slug, result) in slugs.iter().zip(join_all(reads).await) {
            match result {
                Ok(article) => {
                    if article.category != category {
                        debug!(
                            slug = %slug,
                            directory = %category,
                            field = %article.category,
                            "category field differs from directory; directory wins for grouping"
                        );
                    }
                    dated.push((article.published_at(), IndexEntry::from_article(&article, &category)));
                }
                Err(e) if e.is_skippable() || matches!(e, Error::NotFound(_)) => {
                    warn!(category = %category, slug = %slug, error = %e, "skipping article");
                }
                Err(e) => return Err(e),
            }
        }
    }

    dated.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(dated.into_iter().map(|(_, entry)| entry).collect())
}
