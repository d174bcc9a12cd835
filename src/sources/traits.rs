use crate::domain::Article;
use crate::errors::NewsResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedLoader: Send + Sync {
    /// Fetch the feed at `address` and map every entry to an article.
    /// Returned articles carry neither a store id nor a feed id.
    fn load(&self, address: &str) -> NewsResult<Vec<Article>>;
}
