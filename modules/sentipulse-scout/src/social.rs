use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use sentipulse_common::{ContentItem, SourceKind};

/// X (Twitter) recent-search endpoint.
const X_SEARCH_URL: &str = "https://api.x.com/2/tweets/search/recent";

/// The recent-search API only accepts page sizes in this range.
const X_MIN_RESULTS: u32 = 10;
const X_MAX_RESULTS: u32 = 100;

// --- SocialFetcher trait ---

#[async_trait]
pub trait SocialFetcher: Send + Sync {
    /// Search recent public posts for a topic query. Each post becomes a
    /// `ContentItem` with engagement = likes + reposts.
    async fn search_posts(&self, query: &str, limit: u32) -> Result<Vec<ContentItem>>;
}

/// No-op social fetcher for when no API token is configured.
pub struct NoopSocialFetcher;

#[async_trait]
impl SocialFetcher for NoopSocialFetcher {
    async fn search_posts(&self, _query: &str, _limit: u32) -> Result<Vec<ContentItem>> {
        Ok(Vec::new())
    }
}

// --- X recent-search fetcher ---

pub struct XSearchFetcher {
    client: reqwest::Client,
    bearer_token: String,
}

#[derive(Debug, Deserialize)]
struct XSearchResponse {
    #[serde(default)]
    data: Vec<XPost>,
}

#[derive(Debug, Deserialize)]
struct XPost {
    text: String,
    #[serde(default)]
    public_metrics: XPublicMetrics,
}

#[derive(Debug, Default, Deserialize)]
struct XPublicMetrics {
    #[serde(default)]
    like_count: u64,
    #[serde(default)]
    retweet_count: u64,
}

impl XPost {
    fn into_item(self) -> ContentItem {
        ContentItem {
            source: SourceKind::Twitter,
            text: self.text,
            engagement: self.public_metrics.like_count + self.public_metrics.retweet_count,
        }
    }
}

impl XSearchFetcher {
    pub fn new(bearer_token: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            bearer_token: bearer_token.to_string(),
        }
    }
}

#[async_trait]
impl SocialFetcher for XSearchFetcher {
    async fn search_posts(&self, query: &str, limit: u32) -> Result<Vec<ContentItem>> {
        let max_results = limit.clamp(X_MIN_RESULTS, X_MAX_RESULTS);
        info!(query, max_results, "Searching X posts");

        let response = self
            .client
            .get(X_SEARCH_URL)
            .bearer_auth(&self.bearer_token)
            .query(&[
                ("query", query),
                ("max_results", &max_results.to_string()),
                ("tweet.fields", "public_metrics"),
            ])
            .send()
            .await
            .context("X search request failed")?;

        if !response.status().is_success() {
            // Rate limits and blocks are routine here; the caller degrades.
            anyhow::bail!("X search returned {}", response.status());
        }

        let parsed: XSearchResponse = response
            .json()
            .await
            .context("Failed to parse X search response")?;

        let items: Vec<ContentItem> = parsed
            .data
            .into_iter()
            .filter(|p| !p.text.trim().is_empty())
            .map(XPost::into_item)
            .collect();

        info!(query, count = items.len(), "X search complete");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_map_to_items_with_summed_engagement() {
        let json = r#"{
            "data": [
                {"text": "La inflación sigue subiendo", "public_metrics": {"like_count": 12, "retweet_count": 3, "reply_count": 9}},
                {"text": "Buen dato de empleo hoy", "public_metrics": {"like_count": 0, "retweet_count": 0}},
                {"text": "   "}
            ]
        }"#;
        let parsed: XSearchResponse = serde_json::from_str(json).unwrap();
        let items: Vec<ContentItem> = parsed
            .data
            .into_iter()
            .filter(|p| !p.text.trim().is_empty())
            .map(XPost::into_item)
            .collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source, SourceKind::Twitter);
        assert_eq!(items[0].engagement, 15);
        assert_eq!(items[1].engagement, 0);
    }

    #[test]
    fn empty_response_parses_to_no_items() {
        let parsed: XSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }
}
