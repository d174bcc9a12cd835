use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsroom")]
#[command(about = "RSS article ingestion with a paginated, filterable read API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the feeds and articles API
    Serve {
        /// Port to listen on (defaults to NEWSROOM_PORT or 8052)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load a feed once and print its articles as JSON, oldest first
    Fetch {
        /// Feed URL to load
        url: String,

        /// Maximum number of articles to print (0 prints all)
        #[arg(long, default_value_t = 0)]
        page_size: usize,

        /// Only print articles in this category (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,
    },
}
