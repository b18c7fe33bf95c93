//! Winterface - web administration interface for a peer-to-peer node.
//!
//! Standalone binary: starts the admin HTTP server over an in-memory demo
//! node. Embedders construct a [`ServerManager`] themselves and inject their
//! own `NodeInterface` implementation instead.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use winterface_node::{Bookmark, MemoryNode};
use winterface_web::{Config, ServerManager};

/// Web administration interface for a peer-to-peer node.
#[derive(Parser, Debug)]
#[command(name = "winterface")]
#[command(about = "Web administration interface for a peer-to-peer node", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,

    /// Start in development mode (more verbose logging by default).
    #[arg(long, env = "WINTERFACE_DEV")]
    dev: bool,
}

/// Demo bookmarks so the UI has something to manage out of the box.
fn demo_bookmarks() -> anyhow::Result<Vec<Bookmark>> {
    let entry = |path: &str, name: &str, key: &str, description: &str| {
        Ok::<_, anyhow::Error>(Bookmark {
            path: path.to_string(),
            name: name.to_string(),
            key: key.parse()?,
            description: description.to_string(),
            explanation: String::new(),
            activelink: false,
        })
    };
    Ok(vec![
        entry(
            "indexes/main",
            "Main Index",
            "USK@demo-main-index/index/12/",
            "Community-maintained index of sites",
        )?,
        entry(
            "indexes/software",
            "Software Index",
            "USK@demo-software-index/software/4/",
            "Directory of software mirrors",
        )?,
        entry(
            "documentation",
            "Node Documentation",
            "USK@demo-docs/docs/1/",
            "Manuals for the node software",
        )?,
    ])
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing; dev mode defaults to debug level
    let default_filter = if args.dev { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // The standalone binary administers an in-memory demo node
    let node = Arc::new(MemoryNode::with_bookmarks("demo node", demo_bookmarks()?));

    let manager = Arc::new(ServerManager::new(config));

    // Ctrl-C triggers a graceful stop
    let stopper = manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, shutting down");
            stopper.stop().await;
        }
    });

    // Blocks until the server is stopped; lifecycle errors exit non-zero
    manager.start(args.dev, node).await?;

    Ok(())
}
