use async_trait::async_trait;
use parish_core::{Article, ContentStore, Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const ARTICLE_EXTENSION: &str = "json";

/// File-system content store: `root/{category}/{slug}.json`, one UTF-8
/// JSON document per article. The runtime never writes to it.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Opens the store, failing fast when the root is missing or not a
    /// directory so the service never starts over a broken tree.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        match tokio::fs::metadata(&root).await {
            Ok(meta) if meta.is_dir() => Ok(Self { root }),
            Ok(_) => Err(Error::StoreUnavailable(
                "content root is not a directory".to_string(),
            )),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::StoreUnavailable(
                "content root does not exist".to_string(),
            )),
            Err(e) => Err(Error::Io(e)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn article_path(&self, category: &str, slug: &str) -> PathBuf {
        self.root
            .join(category)
            .join(format!("{slug}.{ARTICLE_EXTENSION}"))
    }
}

fn validate(slug: &str, article: &Article) -> Result<()> {
    for (field, value) in [
        ("id", &article.id),
        ("title", &article.title),
        ("date", &article.date),
    ] {
        if value.is_empty() {
            return Err(Error::Validation {
                slug: slug.to_string(),
                reason: format!("missing required field '{field}'"),
            });
        }
    }
    if article.id != slug {
        return Err(Error::Validation {
            slug: slug.to_string(),
            reason: format!("id '{}' does not match filename", article.id),
        });
    }
    Ok(())
}

#[async_trait]
impl ContentStore for FsStore {
    async fn list_categories(&self) -> Result<Vec<String>> {
        let mut dir = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::StoreUnavailable("content root does not exist".to_string())
            } else {
                Error::Io(e)
            }
        })?;

        let mut categories = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    categories.push(name.to_string());
                }
            }
        }
        categories.sort();
        Ok(categories)
    }

    async fn list_article_files(&self, category: &str) -> Result<Vec<String>> {
        let path = self.root.join(category);
        let mut dir = tokio::fs::read_dir(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::NotFound(category.to_string())
            } else {
                Error::Io(e)
            }
        })?;

        let mut slugs = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(ARTICLE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                slugs.push(stem.to_string());
            }
        }
        slugs.sort();
        Ok(slugs)
    }

    async fn read_article(&self, category: &str, slug: &str) -> Result<Article> {
        let path = self.article_path(category, slug);
        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::NotFound(slug.to_string())
            } else {
                Error::Io(e)
            }
        })?;

        let article: Article = serde_json::from_str(&raw).map_err(|source| Error::Corrupt {
            slug: slug.to_string(),
            source,
        })?;
        validate(slug, &article)?;
        Ok(article)
    }
}
