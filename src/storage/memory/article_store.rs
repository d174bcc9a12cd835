use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::domain::Article;
use crate::errors::{NewsError, NewsResult};
use crate::storage::identity::{self, ARTICLE_NAMESPACE};
use crate::storage::traits::{ArticleQuery, ArticleRepository};

#[derive(Default)]
struct Index {
    /// Sorted non-descending by publish date. Source of iteration order.
    ordered: Vec<Arc<Article>>,
    by_id: HashMap<String, Arc<Article>>,
}

impl Index {
    /// Position that keeps `ordered` sorted. Articles newer than or equal to the
    /// last one are appended; older than or equal to the first are prepended;
    /// anything else goes right after the closest strictly older article,
    /// scanning from the end.
    fn insert_position(&self, published: DateTime<Utc>) -> usize {
        let (Some(first), Some(last)) = (self.ordered.first(), self.ordered.last()) else {
            return 0;
        };
        if last.published <= published {
            return self.ordered.len();
        }
        if published <= first.published {
            return 0;
        }
        self.ordered[..self.ordered.len() - 1]
            .iter()
            .rposition(|a| a.published < published)
            .map_or(0, |i| i + 1)
    }

    /// Index of the first article to return for `cursor`.
    fn start_of(&self, cursor: &str) -> Option<usize> {
        if cursor.is_empty() {
            return Some(0);
        }
        self.ordered
            .iter()
            .position(|a| a.id == cursor)
            .map(|i| i + 1)
    }
}

/// Time-ordered article index.
///
/// Writes pay an O(n) insertion to keep the sequence sorted so that reads can
/// paginate without sorting. Pages are resolved against the current order: an
/// article inserted before an already-returned cursor is not revisited by
/// later pages.
#[derive(Default)]
pub struct MemoryArticleStore {
    index: RwLock<Index>,
}

impl MemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> NewsResult<usize> {
        Ok(self.read()?.ordered.len())
    }

    fn read(&self) -> NewsResult<RwLockReadGuard<'_, Index>> {
        self.index.read().map_err(|_| NewsError::LockPoisoned)
    }

    fn write(&self) -> NewsResult<RwLockWriteGuard<'_, Index>> {
        self.index.write().map_err(|_| NewsError::LockPoisoned)
    }
}

impl ArticleRepository for MemoryArticleStore {
    fn create(&self, article: Option<Article>) -> NewsResult<Option<Arc<Article>>> {
        let Some(mut article) = article else {
            return Ok(None);
        };

        let id = identity::generate(&ARTICLE_NAMESPACE, &article.guid);
        let mut index = self.write()?;
        if let Some(existing) = index.by_id.get(&id) {
            return Ok(Some(Arc::clone(existing)));
        }

        article.id = id.clone();
        let stored = Arc::new(article);
        let position = index.insert_position(stored.published);
        index.ordered.insert(position, Arc::clone(&stored));
        index.by_id.insert(id, Arc::clone(&stored));
        Ok(Some(stored))
    }

    fn list(&self, query: &ArticleQuery) -> NewsResult<Vec<Arc<Article>>> {
        let categories: HashSet<&str> = query.categories.iter().map(String::as_str).collect();
        let limit = match query.page_size {
            0 => usize::MAX,
            n => n,
        };

        let index = self.read()?;
        let start = index
            .start_of(&query.cursor)
            .ok_or_else(|| NewsError::CursorNotFound(query.cursor.clone()))?;

        let page = index.ordered[start..]
            .iter()
            .filter(|a| categories.is_empty() || a.has_any_category(&categories))
            .filter(|a| query.feed.is_empty() || a.feed_id == query.feed)
            .take(limit)
            .cloned()
            .collect();

        Ok(page)
    }

    fn get(&self, id: &str) -> NewsResult<Arc<Article>> {
        if id.is_empty() {
            return Err(NewsError::InvalidArgument("empty article id".to_string()));
        }
        self.read()?
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| NewsError::NotFound(id.to_string()))
    }

    fn reset(&self) {
        *self.index.write().unwrap_or_else(PoisonError::into_inner) = Index::default();
        self.index.clear_poison();
    }
}
