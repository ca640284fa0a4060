use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("article not found: {0}")]
    NotFound(String),

    #[error("corrupt article document '{slug}': {source}")]
    Corrupt {
        slug: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid article document '{slug}': {reason}")]
    Validation { slug: String, reason: String },

    #[error("content store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("external error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for failures that the index builder skips over instead of
    /// aborting the whole listing.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Error::Corrupt { .. } | Error::Validation { .. } | Error::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
