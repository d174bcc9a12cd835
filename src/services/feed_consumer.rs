use crate::domain::Feed;
use crate::errors::NewsResult;
use crate::sources::FeedLoader;
use crate::storage::traits::ArticleRepository;

/// Something that can pull a feed's articles into storage.
#[cfg_attr(test, mockall::automock)]
pub trait Consumer: Send + Sync {
    /// Returns how many articles were handed to the store.
    fn consume(&self, feed: &Feed) -> NewsResult<usize>;
}

pub struct FeedConsumer<L: FeedLoader, S: ArticleRepository> {
    loader: L,
    store: S,
}

impl<L: FeedLoader, S: ArticleRepository> FeedConsumer<L, S> {
    pub fn new(loader: L, store: S) -> Self {
        Self { loader, store }
    }
}

impl<L: FeedLoader, S: ArticleRepository> Consumer for FeedConsumer<L, S> {
    /// Load the feed and store every article under the feed's id.
    ///
    /// Stops at the first store error. Articles stored before the failure stay
    /// stored.
    fn consume(&self, feed: &Feed) -> NewsResult<usize> {
        let articles = self.loader.load(&feed.address)?;
        tracing::debug!("Loaded {} articles from {}", articles.len(), feed.address);

        let mut stored = 0;
        for mut article in articles {
            article.feed_id = feed.id.clone();
            self.store.create(Some(article))?;
            stored += 1;
        }

        tracing::info!("Consumed {} articles from feed {}", stored, feed.id);
        Ok(stored)
    }
}
