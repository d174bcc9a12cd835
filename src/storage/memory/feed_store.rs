use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::Feed;
use crate::errors::{NewsError, NewsResult};
use crate::storage::identity::{self, FEED_NAMESPACE};
use crate::storage::traits::FeedRepository;

/// Unordered feed registry keyed by the id derived from each feed's address.
#[derive(Default)]
pub struct MemoryFeedStore {
    feeds: RwLock<HashMap<String, Arc<Feed>>>,
}

impl MemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> NewsResult<RwLockReadGuard<'_, HashMap<String, Arc<Feed>>>> {
        self.feeds.read().map_err(|_| NewsError::LockPoisoned)
    }

    fn write(&self) -> NewsResult<RwLockWriteGuard<'_, HashMap<String, Arc<Feed>>>> {
        self.feeds.write().map_err(|_| NewsError::LockPoisoned)
    }
}

impl FeedRepository for MemoryFeedStore {
    fn create(&self, feed: Option<Feed>) -> NewsResult<Option<Arc<Feed>>> {
        let Some(mut feed) = feed else {
            return Ok(None);
        };

        let id = identity::generate(&FEED_NAMESPACE, &feed.address);
        let mut feeds = self.write()?;
        if let Some(existing) = feeds.get(&id) {
            return Ok(Some(Arc::clone(existing)));
        }

        feed.id = id.clone();
        let stored = Arc::new(feed);
        feeds.insert(id, Arc::clone(&stored));
        Ok(Some(stored))
    }

    fn list(&self) -> NewsResult<Vec<Arc<Feed>>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn get(&self, id: &str) -> NewsResult<Arc<Feed>> {
        if id.is_empty() {
            return Err(NewsError::InvalidArgument("empty feed id".to_string()));
        }
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| NewsError::NotFound(id.to_string()))
    }

    fn reset(&self) {
        self.feeds
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.feeds.clear_poison();
    }
}
