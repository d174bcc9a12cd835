pub mod feed_consumer;

pub use feed_consumer::{Consumer, FeedConsumer};
