use std::time::Duration;

use feed_rs::model::Entry;
use feed_rs::parser;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::{Article, Enclosure};
use crate::errors::{NewsError, NewsResult};
use crate::sources::traits::FeedLoader;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads RSS, Atom and JSON feeds over HTTP.
pub struct RssLoader {
    client: Client,
}

impl RssLoader {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch(&self, address: &str) -> NewsResult<Vec<u8>> {
        let url = Url::parse(address).map_err(|e| NewsError::InvalidUrl(format!("{address}: {e}")))?;
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }

    /// Parse raw feed bytes into articles. Fails as a whole if any entry lacks
    /// a usable publish date.
    pub fn articles_from_bytes(bytes: &[u8]) -> NewsResult<Vec<Article>> {
        let parsed = parser::parse(bytes).map_err(|e| NewsError::FeedParse(e.to_string()))?;
        parsed.entries.into_iter().map(entry_to_article).collect()
    }
}

impl Default for RssLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedLoader for RssLoader {
    fn load(&self, address: &str) -> NewsResult<Vec<Article>> {
        let bytes = self.fetch(address)?;
        Self::articles_from_bytes(&bytes)
    }
}

fn entry_to_article(entry: Entry) -> NewsResult<Article> {
    let published = entry.published.or(entry.updated).ok_or_else(|| {
        NewsError::FeedParse(format!("could not parse publish date for entry {}", entry.id))
    })?;

    let link = entry
        .links
        .iter()
        .find(|l| l.rel.as_deref() != Some("replies"))
        .map(|l| l.href.clone())
        .unwrap_or_default();
    let comments = entry
        .links
        .iter()
        .find(|l| l.rel.as_deref() == Some("replies"))
        .map(|l| l.href.clone())
        .unwrap_or_default();

    let enclosures = entry
        .media
        .iter()
        .flat_map(|m| m.content.iter())
        .filter_map(|c| {
            let url = c.url.as_ref()?.to_string();
            let media_type = c.content_type.as_ref().map(|t| t.to_string()).unwrap_or_default();
            Some(Enclosure::new(url, media_type))
        })
        .collect();

    let author = entry
        .authors
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Article::new(entry.id, published)
        .with_title(entry.title.map(|t| t.content).unwrap_or_default())
        .with_link(link)
        .with_comments(comments)
        .with_categories(entry.categories.into_iter().map(|c| c.term).collect())
        .with_enclosures(enclosures)
        .with_description(entry.summary.map(|s| s.content).unwrap_or_default())
        .with_author(author)
        .with_content(entry.content.and_then(|c| c.body).unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const SAMPLE_RSS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>World News</title>
    <link>https://news.example.com/</link>
    <description>Top stories</description>
    <item>
      <title>Harbour reopens after storm</title>
      <link>https://news.example.com/harbour</link>
      <description>Ships are moving again.</description>
      <pubDate>Thu, 28 Dec 2023 10:00:00 +0000</pubDate>
      <guid>https://news.example.com/harbour</guid>
      <category>world</category>
      <category>weather</category>
      <enclosure url="https://news.example.com/harbour.mp3" length="1024" type="audio/mpeg"/>
    </item>
    <item>
      <title>Budget passes</title>
      <link>https://news.example.com/budget</link>
      <pubDate>Wed, 10 Jan 2024 08:30:00 +0000</pubDate>
      <guid>budget-2024</guid>
    </item>
  </channel>
</rss>"#;

    const RSS_WITHOUT_DATE: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Undated</title>
    <link>https://news.example.com/</link>
    <description>No dates here</description>
    <item>
      <title>Timeless</title>
      <link>https://news.example.com/timeless</link>
      <guid>timeless</guid>
    </item>
  </channel>
</rss>"#;

    const EMPTY_RSS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Quiet</title>
    <link>https://news.example.com/</link>
    <description>Nothing yet</description>
  </channel>
</rss>"#;

    #[test]
    fn test_rss_items_map_to_articles() {
        let articles = RssLoader::articles_from_bytes(SAMPLE_RSS).unwrap();

        assert_eq!(articles.len(), 2);

        let first = &articles[0];
        assert_eq!(first.guid, "https://news.example.com/harbour");
        assert_eq!(first.title, "Harbour reopens after storm");
        assert_eq!(first.link, "https://news.example.com/harbour");
        assert_eq!(first.description, "Ships are moving again.");
        assert_eq!(first.categories, vec!["world", "weather"]);
        assert_eq!(
            first.published,
            Utc.with_ymd_and_hms(2023, 12, 28, 10, 0, 0).unwrap()
        );
        assert!(first.id.is_empty());
        assert!(first.feed_id.is_empty());

        assert_eq!(articles[1].guid, "budget-2024");
        assert!(articles[1].categories.is_empty());
    }

    #[test]
    fn test_rss_enclosure_is_kept() {
        let articles = RssLoader::articles_from_bytes(SAMPLE_RSS).unwrap();

        let enclosure = &articles[0].enclosures[0];
        assert_eq!(enclosure.url, "https://news.example.com/harbour.mp3");
        assert_eq!(enclosure.media_type, "audio/mpeg");
        assert!(articles[1].enclosures.is_empty());
    }

    #[test]
    fn test_missing_publish_date_fails_the_load() {
        let err = RssLoader::articles_from_bytes(RSS_WITHOUT_DATE).unwrap_err();
        assert!(matches!(err, NewsError::FeedParse(_)));
        assert!(err.to_string().contains("could not parse publish date"));
    }

    #[test]
    fn test_empty_feed_yields_no_articles() {
        let articles = RssLoader::articles_from_bytes(EMPTY_RSS).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let err = RssLoader::articles_from_bytes(b"definitely not a feed").unwrap_err();
        assert!(err.is_upstream());
        assert!(matches!(err, NewsError::FeedParse(_)));
    }

    #[test]
    fn test_relative_address_is_rejected_before_fetching() {
        let loader = RssLoader::new();
        let err = loader.load("not a url").unwrap_err();
        assert!(matches!(err, NewsError::InvalidUrl(_)));
    }
}
