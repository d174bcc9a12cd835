mod article_store;
mod feed_store;

pub use article_store::MemoryArticleStore;
pub use feed_store::MemoryFeedStore;
