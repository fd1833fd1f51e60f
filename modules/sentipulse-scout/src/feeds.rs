use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

/// Google News RSS search endpoint.
const GOOGLE_NEWS_RSS: &str = "https://news.google.com/rss/search";

/// A news search hit: headline text plus the article link.
#[derive(Debug, Clone)]
pub struct Headline {
    pub title: String,
    pub link: String,
}

// --- NewsSource trait ---

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Search news for a topic query. Query operators (`when:7d`, `site:`,
    /// boolean AND/OR) pass through opaquely to the backend.
    async fn headlines(&self, query: &str, limit: usize) -> Result<Vec<Headline>>;
}

// --- Google News RSS ---

/// News search backed by the Google News RSS feed for a configured locale.
pub struct GoogleNewsSource {
    client: reqwest::Client,
    language: String,
    country: String,
}

impl GoogleNewsSource {
    pub fn new(language: &str, country: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            language: language.to_string(),
            country: country.to_string(),
        }
    }

    fn feed_url(&self, query: &str) -> String {
        let mut url = url::Url::parse(GOOGLE_NEWS_RSS).expect("valid feed base URL");
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("hl", &self.language)
            .append_pair("gl", &self.country)
            .append_pair("ceid", &format!("{}:{}", self.country, self.language));
        url.into()
    }
}

#[async_trait]
impl NewsSource for GoogleNewsSource {
    async fn headlines(&self, query: &str, limit: usize) -> Result<Vec<Headline>> {
        let feed_url = self.feed_url(query);
        info!(query, "Fetching news feed");

        let bytes = self
            .client
            .get(&feed_url)
            .send()
            .await
            .context("News feed request failed")?
            .error_for_status()
            .context("News feed returned error status")?
            .bytes()
            .await
            .context("Failed to read news feed body")?;

        let feed = feed_rs::parser::parse(&bytes[..]).context("Failed to parse news feed")?;

        let headlines: Vec<Headline> = feed
            .entries
            .into_iter()
            .filter_map(|entry| {
                let title = entry.title.map(|t| t.content)?;
                let link = entry.links.first().map(|l| l.href.clone())?;
                Some(Headline { title, link })
            })
            .take(limit)
            .collect();

        info!(query, count = headlines.len(), "News feed fetched");
        Ok(headlines)
    }
}
