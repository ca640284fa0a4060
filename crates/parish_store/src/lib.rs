pub mod fs;
pub mod index;
pub mod resolve;

pub use fs::FsStore;
pub use index::build_index;
pub use resolve::{resolve, resolve_with_map, ResolveContext, SlugMap};

pub mod prelude {
    pub use crate::{build_index, FsStore, ResolveContext, SlugMap};
    pub use parish_core::{Article, ContentStore, Error, Result};
}
