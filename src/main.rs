use std::sync::Arc;

use clap::Parser;

use newsroom::api::{self, AppState};
use newsroom::cli::{Cli, Commands};
use newsroom::config::Config;
use newsroom::domain::Feed;
use newsroom::errors::{NewsError, NewsResult};
use newsroom::services::{Consumer, FeedConsumer};
use newsroom::sources::RssLoader;
use newsroom::storage::{
    ArticleQuery, ArticleRepository, FeedRepository, MemoryArticleStore, MemoryFeedStore,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> NewsResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    match cli.command {
        Commands::Serve { port } => cmd_serve(&config, port),
        Commands::Fetch {
            url,
            page_size,
            categories,
        } => cmd_fetch(&config, url, page_size, categories),
    }
}

fn cmd_serve(config: &Config, port: Option<u16>) -> NewsResult<()> {
    let mut addr = config.addr();
    if let Some(port) = port {
        addr.set_port(port);
    }

    let feeds = Arc::new(MemoryFeedStore::new());
    let articles = Arc::new(MemoryArticleStore::new());
    // Built outside the runtime: the blocking HTTP client must not be created
    // or dropped on an async worker.
    let consumer = Arc::new(FeedConsumer::new(
        RssLoader::with_timeout(config.fetch_timeout),
        Arc::clone(&articles),
    ));
    let state = AppState::new(feeds, articles, consumer.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(api::serve(addr, state));
    drop(runtime);
    drop(consumer);
    result
}

fn cmd_fetch(
    config: &Config,
    url: String,
    page_size: usize,
    categories: Vec<String>,
) -> NewsResult<()> {
    let feeds = MemoryFeedStore::new();
    let articles = Arc::new(MemoryArticleStore::new());
    let consumer = FeedConsumer::new(
        RssLoader::with_timeout(config.fetch_timeout),
        Arc::clone(&articles),
    );

    let feed = feeds
        .create(Some(Feed::new(String::new(), String::new(), url)))?
        .ok_or_else(|| NewsError::InvalidArgument("feed was not registered".to_string()))?;

    tracing::info!("Fetching {}", feed.address);
    consumer.consume(&feed)?;

    let query = ArticleQuery {
        page_size,
        categories,
        ..ArticleQuery::default()
    };
    let page = articles.list(&query)?;
    tracing::info!("{} of {} articles match", page.len(), articles.len()?);

    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
