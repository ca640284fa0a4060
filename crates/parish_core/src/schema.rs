use crate::types::Article;
use serde_json::{json, Value};

/// Publisher identity baked into every structured-data payload.
#[derive(Debug, Clone)]
pub struct SiteIdentity {
    pub name: String,
    pub logo_url: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "Parish".to_string(),
            logo_url: "/images/logo.png".to_string(),
        }
    }
}

/// Projects an article into its schema.org JSON-LD description.
///
/// Pure and total for any valid article; the same input always yields an
/// identical payload. Field names and nesting follow schema.org exactly
/// because downstream SEO consumers validate against it. The embedded
/// `category` field is used for `articleSection` (it is display-only;
/// routing uses the directory name instead).
pub fn article_schema(article: &Article, canonical_url: &str, site: &SiteIdentity) -> Value {
    let keywords = match &article.tags {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => article.category.clone(),
    };

    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "description": article.subtitle,
        "author": {
            "@type": "Person",
            "name": article.author,
        },
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "logo": {
                "@type": "ImageObject",
                "url": site.logo_url,
            },
        },
        "datePublished": article.date,
        "articleSection": article.category,
        "keywords": keywords,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": canonical_url,
        },
    })
}
