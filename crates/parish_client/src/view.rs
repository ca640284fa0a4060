use crate::api::ApiClient;
use crate::head::{build_article_head, PageHead};
use crate::render::render_article;
use parish_core::{ResolvedArticle, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

const ERROR_MESSAGE: &str = "Unable to load this article. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Rendered(RenderedPage),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub html: String,
    pub head: PageHead,
}

/// Token handed out when a load begins; completion only applies if the
/// view has not started a newer load since (avoids a late resolve
/// overwriting the article the user navigated to).
#[derive(Debug)]
pub struct LoadTicket {
    slug: String,
    generation: u64,
}

impl LoadTicket {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Per-view article controller. Owns its cache (keyed by slug, filled
/// lazily, unbounded for the view's lifetime) instead of sharing
/// process-wide state; construct one per mounted view and drop it on
/// unmount.
pub struct ArticleView {
    client: ApiClient,
    site_name: String,
    cache: HashMap<String, ResolvedArticle>,
    state: ViewState,
    generation: u64,
}

impl ArticleView {
    pub fn new(client: ApiClient, site_name: impl Into<String>) -> Self {
        Self {
            client,
            site_name: site_name.into(),
            cache: HashMap::new(),
            state: ViewState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn render(&self, resolved: &ResolvedArticle) -> RenderedPage {
        RenderedPage {
            html: render_article(&resolved.article),
            head: build_article_head(resolved, &self.site_name),
        }
    }

    /// Starts a load. A cache hit renders immediately and returns no
    /// ticket; otherwise the caller fetches and hands the result to
    /// [`complete_load`](Self::complete_load).
    pub fn begin_load(&mut self, slug: &str) -> Option<LoadTicket> {
        self.generation += 1;
        if let Some(hit) = self.cache.get(slug) {
            debug!(slug = %slug, "article served from view cache");
            self.state = ViewState::Rendered(self.render(hit));
            return None;
        }
        self.state = ViewState::Loading;
        Some(LoadTicket {
            slug: slug.to_string(),
            generation: self.generation,
        })
    }

    /// Applies a fetch result, unless a newer load has started since
    /// the ticket was issued; stale results are discarded.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<ResolvedArticle>) {
        if ticket.generation != self.generation {
            debug!(slug = %ticket.slug, "discarding stale article load");
            return;
        }
        match result {
            Ok(resolved) => {
                self.state = ViewState::Rendered(self.render(&resolved));
                self.cache.insert(ticket.slug, resolved);
            }
            Err(e) => {
                // Cause stays in the logs; the user sees a generic panel.
                warn!(slug = %ticket.slug, error = %e, "article load failed");
                self.state = ViewState::Failed(ERROR_MESSAGE.to_string());
            }
        }
    }

    pub async fn load(&mut self, slug: &str) {
        if let Some(ticket) = self.begin_load(slug) {
            let result = self.client.fetch_article(ticket.slug()).await;
            self.complete_load(ticket, result);
        }
    }

    pub fn cached(&self, slug: &str) -> bool {
        self.cache.contains_key(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parish_core::Error;
    use url::Url;

    fn resolved(slug: &str, title: &str) -> ResolvedArticle {
        serde_json::from_str(&format!(
            r#"{{
                "article": {{
                    "id": "{slug}", "title": "{title}", "subtitle": "",
                    "author": "A", "date": "2024-01-01", "category": "qa",
                    "readTime": "1 min", "sections": []
                }},
                "schema": {{"@type": "Article"}},
                "url": "/articles/qa/{slug}",
                "canonicalUrl": "https://example.org/articles/qa/{slug}"
            }}"#
        ))
        .unwrap()
    }

    fn view() -> ArticleView {
        ArticleView::new(
            ApiClient::new(Url::parse("http://127.0.0.1:1/").unwrap()),
            "Parish",
        )
    }

    #[test]
    fn stale_resolve_is_discarded() {
        let mut view = view();
        let first = view.begin_load("what-is-tewahdo").unwrap();
        let second = view.begin_load("kidase-explained").unwrap();

        // The first fetch resolves after the user navigated away.
        view.complete_load(first, Ok(resolved("what-is-tewahdo", "Old")));
        assert_eq!(*view.state(), ViewState::Loading);

        view.complete_load(second, Ok(resolved("kidase-explained", "New")));
        match view.state() {
            ViewState::Rendered(page) => assert!(page.html.contains("New")),
            other => panic!("expected Rendered, got {other:?}"),
        }
    }

    #[test]
    fn cache_hit_skips_the_fetch() {
        let mut view = view();
        let ticket = view.begin_load("what-is-tewahdo").unwrap();
        view.complete_load(ticket, Ok(resolved("what-is-tewahdo", "Cached")));
        assert!(view.cached("what-is-tewahdo"));

        // Second open: no ticket, rendered straight from the cache.
        assert!(view.begin_load("what-is-tewahdo").is_none());
        match view.state() {
            ViewState::Rendered(page) => assert!(page.html.contains("Cached")),
            other => panic!("expected Rendered, got {other:?}"),
        }
    }

    #[test]
    fn failures_render_a_generic_error_panel() {
        let mut view = view();
        let ticket = view.begin_load("missing").unwrap();
        view.complete_load(ticket, Err(Error::NotFound("missing".to_string())));
        match view.state() {
            ViewState::Failed(msg) => {
                assert_eq!(msg, ERROR_MESSAGE);
                assert!(!msg.contains("missing"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(!view.cached("missing"));
    }
}
