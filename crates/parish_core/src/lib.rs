pub mod error;
pub mod schema;
pub mod store;
pub mod types;

pub use error::Error;
pub use schema::SiteIdentity;
pub use store::ContentStore;
pub use types::{Article, ArticleListing, IndexEntry, Reference, ResolvedArticle, Section, Series};

pub type Result<T> = std::result::Result<T, Error>;
