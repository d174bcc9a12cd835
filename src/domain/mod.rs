pub mod feed;
pub mod article;

pub use feed::Feed;
pub use article::{Article, Enclosure};
