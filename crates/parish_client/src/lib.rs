pub mod api;
pub mod head;
pub mod render;
pub mod view;

pub use api::ApiClient;
pub use head::{build_article_head, PageHead};
pub use render::{render_article, render_listing};
pub use view::{ArticleView, LoadTicket, RenderedPage, ViewState};
