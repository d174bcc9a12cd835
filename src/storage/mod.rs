pub mod identity;
pub mod memory;
pub mod traits;

pub use traits::{ArticleQuery, ArticleRepository, FeedRepository};
pub use memory::{MemoryArticleStore, MemoryFeedStore};
