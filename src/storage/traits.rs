use std::sync::Arc;

use crate::domain::{Article, Feed};
use crate::errors::NewsResult;

/// Filters and position for one page of [`ArticleRepository::list`].
///
/// An empty `cursor` starts from the oldest article, otherwise the page starts
/// right after the article with that id. A `page_size` of zero means no limit.
/// Empty `feed` and `categories` disable the corresponding filter; categories
/// match if any of them is present on the article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub cursor: String,
    pub page_size: usize,
    pub feed: String,
    pub categories: Vec<String>,
}

impl ArticleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }

    pub fn limit(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn feed(mut self, feed: impl Into<String>) -> Self {
        self.feed = feed.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait FeedRepository: Send + Sync {
    fn create(&self, feed: Option<Feed>) -> NewsResult<Option<Arc<Feed>>>;
    fn list(&self) -> NewsResult<Vec<Arc<Feed>>>;
    fn get(&self, id: &str) -> NewsResult<Arc<Feed>>;
    fn reset(&self);
}

#[cfg_attr(test, mockall::automock)]
pub trait ArticleRepository: Send + Sync {
    fn create(&self, article: Option<Article>) -> NewsResult<Option<Arc<Article>>>;
    fn list(&self, query: &ArticleQuery) -> NewsResult<Vec<Arc<Article>>>;
    fn get(&self, id: &str) -> NewsResult<Arc<Article>>;
    fn reset(&self);
}

impl<T: ArticleRepository + ?Sized> ArticleRepository for Arc<T> {
    fn create(&self, article: Option<Article>) -> NewsResult<Option<Arc<Article>>> {
        (**self).create(article)
    }

    fn list(&self, query: &ArticleQuery) -> NewsResult<Vec<Arc<Article>>> {
        (**self).list(query)
    }

    fn get(&self, id: &str) -> NewsResult<Arc<Article>> {
        (**self).get(id)
    }

    fn reset(&self) {
        (**self).reset()
    }
}
