use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A full article document as authored in the content store, one JSON
/// file per article under `root/{category}/{slug}.json`.
///
/// The `id` equals the filename minus its extension and is unique across
/// the whole store. The `category` field is display-only; the directory
/// the file lives in is authoritative for grouping and routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "readTime", alias = "reading_time", default)]
    pub read_time: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_articles: Option<Vec<String>>,
}

impl Article {
    /// Publication instant used for listing order. Accepts RFC 3339 or a
    /// bare `YYYY-MM-DD` date; anything unparsable sorts as the Unix
    /// epoch so that broken dates sink to the bottom deterministically.
    pub fn published_at(&self) -> DateTime<Utc> {
        parse_date(&self.date)
    }
}

pub fn parse_date(raw: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_time(NaiveTime::MIN).and_utc();
    }
    DateTime::<Utc>::UNIX_EPOCH
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub number: u32,
    pub citation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub title: String,
    pub part: u32,
    pub total_parts: u32,
}

/// Lightweight metadata projection of an [`Article`] used for listings.
/// Derived per request, never persisted. `category` and the category
/// segment of `url` come from the directory the article lives in, not
/// from the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub read_time: String,
    pub slug: String,
    pub url: String,
}

impl IndexEntry {
    pub fn from_article(article: &Article, directory_category: &str) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            subtitle: article.subtitle.clone(),
            author: article.author.clone(),
            date: article.date.clone(),
            category: directory_category.to_string(),
            read_time: article.read_time.clone(),
            slug: article.id.clone(),
            url: format!("/articles/{}/{}", directory_category, article.id),
        }
    }
}

/// Wire envelope for `GET /articles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleListing {
    pub articles: Vec<IndexEntry>,
}

/// Wire envelope for `GET /articles/{slug}`: the full document plus its
/// schema.org projection and routing urls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedArticle {
    pub article: Article,
    pub schema: serde_json::Value,
    pub url: String,
    pub canonical_url: String,
}
