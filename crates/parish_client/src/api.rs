use parish_core::{ArticleListing, Error, IndexEntry, ResolvedArticle, Result};
use url::Url;

/// Thin wrapper over the Publishing API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::External(anyhow::Error::new(e)))
    }

    pub async fn fetch_index(&self) -> Result<Vec<IndexEntry>> {
        let url = self.endpoint("/articles")?;
        let listing: ArticleListing = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(listing.articles)
    }

    /// Fetches one article; a 404 maps to [`Error::NotFound`] so callers
    /// can distinguish a missing article from a transport failure.
    pub async fn fetch_article(&self, slug: &str) -> Result<ResolvedArticle> {
        let url = self.endpoint(&format!("/articles/{slug}"))?;
        let response = self.http.get(url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(slug.to_string()));
        }
        Ok(response.error_for_status()?.json().await?)
    }
}
