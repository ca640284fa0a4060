use parish_core::ResolvedArticle;

/// Mutable model of the document head the renderer updates on each
/// article view: title, meta description, canonical link, Open Graph
/// tags and the embedded JSON-LD payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageHead {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: Vec<(String, String)>,
    pub json_ld: Option<String>,
}

pub fn build_article_head(resolved: &ResolvedArticle, site_name: &str) -> PageHead {
    let article = &resolved.article;
    PageHead {
        title: format!("{} | {}", article.title, site_name),
        description: article.subtitle.clone(),
        canonical: resolved.canonical_url.clone(),
        open_graph: vec![
            ("og:title".to_string(), article.title.clone()),
            ("og:description".to_string(), article.subtitle.clone()),
            ("og:type".to_string(), "article".to_string()),
            ("og:url".to_string(), resolved.canonical_url.clone()),
        ],
        json_ld: serde_json::to_string_pretty(&resolved.schema).ok(),
    }
}
