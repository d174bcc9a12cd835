use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media attached to an article, owned by it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

impl Enclosure {
    pub fn new(url: String, media_type: String) -> Self {
        Self { url, media_type }
    }
}

/// One ingested feed entry. `id` is assigned by the article store from `guid`;
/// `feed_id` is stamped by the consumer before the article is stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub feed_id: String,
    pub id: String,
    pub guid: String,
    pub title: String,
    pub link: String,
    pub comments: String,
    pub published: DateTime<Utc>,
    pub categories: Vec<String>,
    pub enclosures: Vec<Enclosure>,
    pub description: String,
    pub author: String,
    pub content: String,
    pub full_text: String,
}

impl Article {
    pub fn new(guid: String, published: DateTime<Utc>) -> Self {
        Self {
            guid,
            published,
            ..Self::default()
        }
    }

    pub fn with_feed_id(mut self, feed_id: String) -> Self {
        self.feed_id = feed_id;
        self
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    pub fn with_link(mut self, link: String) -> Self {
        self.link = link;
        self
    }

    pub fn with_comments(mut self, comments: String) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_enclosures(mut self, enclosures: Vec<Enclosure>) -> Self {
        self.enclosures = enclosures;
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_author(mut self, author: String) -> Self {
        self.author = author;
        self
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = content;
        self
    }

    /// True if any of the article's categories is in `filter`.
    pub fn has_any_category(&self, filter: &std::collections::HashSet<&str>) -> bool {
        self.categories.iter().any(|c| filter.contains(c.as_str()))
    }
}
