use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use spider_transformations::transformation::content::{
    transform_content_input, ReturnFormat, TransformConfig, TransformInput,
};
use tracing::{info, warn};

/// Per-article fetch timeout. Slow outlets forfeit their body text; the
/// headline still gets scored.
const ARTICLE_TIMEOUT: Duration = Duration::from_secs(10);

// --- ArticleScraper trait ---

#[async_trait]
pub trait ArticleScraper: Send + Sync {
    /// Fetch an article and extract its readable main content.
    async fn article_text(&self, url: &str) -> Result<String>;
}

// --- HTTP + Readability scraper ---

/// Plain HTTP fetch followed by Readability extraction of the main content.
/// News article bodies render server-side; no JS rendering needed here.
pub struct HttpArticleScraper {
    client: reqwest::Client,
}

impl HttpArticleScraper {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(ARTICLE_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpArticleScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleScraper for HttpArticleScraper {
    async fn article_text(&self, url: &str) -> Result<String> {
        let parsed = url::Url::parse(url).context("Invalid article URL")?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("Only http/https URLs are allowed, got: {}", parsed.scheme());
        }

        let html = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .context("Article request failed")?
            .error_for_status()
            .context("Article returned error status")?
            .text()
            .await
            .context("Failed to read article body")?;

        if html.is_empty() {
            warn!(url, "Empty article response");
            return Ok(String::new());
        }

        let config = TransformConfig {
            readability: true,
            main_content: true,
            return_format: ReturnFormat::Markdown,
            filter_images: true,
            filter_svg: true,
            clean_html: true,
        };
        let input = TransformInput {
            url: Some(&parsed),
            content: html.as_bytes(),
            screenshot_bytes: None,
            encoding: None,
            selector_config: None,
            ignore_tags: None,
        };

        let text = transform_content_input(input, &config);

        if text.trim().is_empty() {
            warn!(url, "Empty content after Readability extraction");
            return Ok(String::new());
        }

        info!(url, bytes = text.len(), "Article fetched");
        Ok(text)
    }
}
