use parish_core::schema::{article_schema, SiteIdentity};
use parish_core::{Article, ContentStore, Error, ResolvedArticle, Result};
use std::collections::HashMap;
use tracing::debug;
use url::Url;

/// Everything the resolver needs beyond the store itself: the public
/// origin for canonical urls and the publisher identity for JSON-LD.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    pub base_url: Url,
    pub site: SiteIdentity,
}

impl ResolveContext {
    pub fn new(base_url: Url, site: SiteIdentity) -> Self {
        Self { base_url, site }
    }

    pub fn canonical_for(&self, path: &str) -> String {
        self.base_url
            .join(path)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| path.to_string())
    }
}

// The directory category the slug was found under goes into the public
// url, regardless of the embedded `category` field (the embedded field
// only feeds display and the schema's `articleSection`).
fn assemble(article: Article, category: &str, ctx: &ResolveContext) -> ResolvedArticle {
    let url = format!("/articles/{}/{}", category, article.id);
    let canonical_url = ctx.canonical_for(&url);
    let schema = article_schema(&article, &canonical_url, &ctx.site);
    ResolvedArticle {
        article,
        schema,
        url,
        canonical_url,
    }
}

/// Resolves a slug by probing categories in sorted order, first match
/// wins. Slugs are unique store-wide so the probe order only matters if
/// that invariant is ever violated; sorted order makes the tiebreak
/// deterministic. A directly requested corrupt document is a hard error,
/// unlike the skip-and-continue policy of the index builder.
pub async fn resolve(
    store: &dyn ContentStore,
    ctx: &ResolveContext,
    slug: &str,
) -> Result<ResolvedArticle> {
    for category in store.list_categories().await? {
        match store.read_article(&category, slug).await {
            Ok(article) => return Ok(assemble(article, &category, ctx)),
            Err(Error::NotFound(_)) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(Error::NotFound(slug.to_string()))
}

/// Precomputed slug → category lookup, built once when the service
/// starts. The store is static for the lifetime of the process, so this
/// is a plain map, not a cache. On a (theoretically impossible) slug
/// collision the first category in sorted order wins, matching the
/// linear probe.
#[derive(Debug, Clone, Default)]
pub struct SlugMap {
    categories: HashMap<String, String>,
}

impl SlugMap {
    pub async fn build(store: &dyn ContentStore) -> Result<Self> {
        let mut categories = HashMap::new();
        for category in store.list_categories().await? {
            for slug in store.list_article_files(&category).await? {
                categories.entry(slug).or_insert_with(|| category.clone());
            }
        }
        debug!(slugs = categories.len(), "slug map built");
        Ok(Self { categories })
    }

    pub fn category_of(&self, slug: &str) -> Option<&str> {
        self.categories.get(slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// O(1) resolution through the precomputed map. Falls back to the same
/// semantics as [`resolve`]: unknown slug is `NotFound`, a corrupt
/// document is a hard error.
pub async fn resolve_with_map(
    store: &dyn ContentStore,
    map: &SlugMap,
    ctx: &ResolveContext,
    slug: &str,
) -> Result<ResolvedArticle> {
    let category = map
        .category_of(slug)
        .ok_or_else(|| Error::NotFound(slug.to_string()))?;
    let article = store.read_article(category, slug).await?;
    Ok(assemble(article, category, ctx))
}
