// Test mocks for the fetch layer.
//
// Three mocks matching the three fetch trait boundaries:
// - MockNewsSource (NewsSource) — HashMap-based query→headlines
// - MockArticleScraper (ArticleScraper) — HashMap-based url→content
// - MockSocialFetcher (SocialFetcher) — HashMap-based query→items

use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;

use sentipulse_common::ContentItem;

use crate::article::ArticleScraper;
use crate::feeds::{Headline, NewsSource};
use crate::social::SocialFetcher;

// ---------------------------------------------------------------------------
// MockNewsSource
// ---------------------------------------------------------------------------

/// HashMap-based news source. Returns `Err` for unregistered queries.
pub struct MockNewsSource {
    feeds: HashMap<String, Vec<Headline>>,
}

impl MockNewsSource {
    pub fn new() -> Self {
        Self {
            feeds: HashMap::new(),
        }
    }

    pub fn on_query(mut self, query: &str, headlines: Vec<(&str, &str)>) -> Self {
        self.feeds.insert(
            query.to_string(),
            headlines
                .into_iter()
                .map(|(title, link)| Headline {
                    title: title.to_string(),
                    link: link.to_string(),
                })
                .collect(),
        );
        self
    }
}

impl Default for MockNewsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSource for MockNewsSource {
    async fn headlines(&self, query: &str, limit: usize) -> Result<Vec<Headline>> {
        match self.feeds.get(query) {
            Some(headlines) => Ok(headlines.iter().take(limit).cloned().collect()),
            None => bail!("MockNewsSource: no feed registered for {query:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// MockArticleScraper
// ---------------------------------------------------------------------------

/// HashMap-based article scraper. Returns `Err` for unregistered URLs.
pub struct MockArticleScraper {
    pages: HashMap<String, String>,
}

impl MockArticleScraper {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn on_url(mut self, url: &str, content: &str) -> Self {
        self.pages.insert(url.to_string(), content.to_string());
        self
    }
}

impl Default for MockArticleScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleScraper for MockArticleScraper {
    async fn article_text(&self, url: &str) -> Result<String> {
        match self.pages.get(url) {
            Some(content) => Ok(content.clone()),
            None => bail!("MockArticleScraper: no page registered for {url}"),
        }
    }
}

// ---------------------------------------------------------------------------
// MockSocialFetcher
// ---------------------------------------------------------------------------

/// HashMap-based social fetcher. Returns `Err` for unregistered queries.
pub struct MockSocialFetcher {
    posts: HashMap<String, Vec<ContentItem>>,
}

impl MockSocialFetcher {
    pub fn new() -> Self {
        Self {
            posts: HashMap::new(),
        }
    }

    pub fn on_query(mut self, query: &str, items: Vec<ContentItem>) -> Self {
        self.posts.insert(query.to_string(), items);
        self
    }
}

impl Default for MockSocialFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SocialFetcher for MockSocialFetcher {
    async fn search_posts(&self, query: &str, _limit: u32) -> Result<Vec<ContentItem>> {
        match self.posts.get(query) {
            Some(items) => Ok(items.clone()),
            None => bail!("MockSocialFetcher: no posts registered for {query:?}"),
        }
    }
}
