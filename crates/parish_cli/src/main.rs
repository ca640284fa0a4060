use clap::Parser;
use parish_core::SiteIdentity;
use parish_store::{build_index, FsStore, ResolveContext, SlugMap};
use parish_web::{create_app, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about = "Article publishing service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the publishing API over a content directory
    Serve {
        /// Content root: one subdirectory per category, one JSON file per article
        #[arg(long, default_value = "content")]
        root: PathBuf,
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
        /// Public origin used for canonical urls
        #[arg(long, default_value = "https://example.org")]
        base_url: Url,
        #[arg(long, default_value = "Parish")]
        site_name: String,
        #[arg(long, default_value = "/images/logo.png")]
        publisher_logo: String,
    },
    /// Print the article listing for a content directory and exit
    Index {
        #[arg(long, default_value = "content")]
        root: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            root,
            addr,
            base_url,
            site_name,
            publisher_logo,
        } => {
            let store = FsStore::open(&root).await?;
            info!(root = %root.display(), "content store opened");

            let slugs = SlugMap::build(&store).await?;
            info!(slugs = slugs.len(), "slug map built");

            let site = SiteIdentity {
                name: site_name,
                logo_url: publisher_logo,
            };
            let ctx = ResolveContext::new(base_url, site);
            let app = create_app(AppState::new(Arc::new(store), slugs, ctx));

            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(addr = %addr, "serving articles");
            axum::serve(listener, app).await?;
        }
        Commands::Index { root } => {
            let store = FsStore::open(&root).await?;
            let index = build_index(&store).await?;
            println!("{}", serde_json::to_string_pretty(&index)?);
        }
    }

    Ok(())
}
