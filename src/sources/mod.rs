pub mod traits;
pub mod rss;

pub use traits::FeedLoader;
pub use rss::RssLoader;
