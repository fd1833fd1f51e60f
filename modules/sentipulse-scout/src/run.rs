use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use sentipulse_common::{BlendedSentiment, ContentItem, SourceKind};
use sentipulse_engine::{
    aggregate_by_source, aggregate_global, scored_results, HybridBlender, ItemAnalysis,
    ItemAnalyzer,
};

use crate::article::ArticleScraper;
use crate::feeds::NewsSource;
use crate::social::SocialFetcher;

/// Posts fetched per topic when social search is enabled.
const SOCIAL_POSTS_PER_TOPIC: u32 = 30;

/// One analysis run: which topics to search and which sources to include.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub topics: Vec<String>,
    pub articles_per_topic: usize,
    pub include_news: bool,
    pub include_social: bool,
}

/// Per-article detail record for presentation: the article identity plus its
/// full-precision blend. Divergence between the two models is readable off
/// the component labels.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetail {
    pub topic: String,
    pub title: String,
    pub link: String,
    pub sentiment: BlendedSentiment,
}

/// Everything a run produced. Serialized as-is for presentation; no
/// formatting happens here.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub items: Vec<ItemAnalysis>,
    pub details: Vec<ArticleDetail>,
    pub by_source: HashMap<SourceKind, f64>,
    pub global_score: f64,
}

/// Orchestrates a run: fetch per topic, score the batch, aggregate.
///
/// Every fetch failure degrades: a dead topic, article, or social query is
/// logged and skipped without touching the rest of the run.
pub struct Scout {
    news: Arc<dyn NewsSource>,
    articles: Arc<dyn ArticleScraper>,
    social: Arc<dyn SocialFetcher>,
    blender: Arc<HybridBlender>,
    analyzer: ItemAnalyzer,
}

impl Scout {
    pub fn new(
        news: Arc<dyn NewsSource>,
        articles: Arc<dyn ArticleScraper>,
        social: Arc<dyn SocialFetcher>,
        blender: Arc<HybridBlender>,
    ) -> Self {
        let analyzer = ItemAnalyzer::new(Arc::clone(&blender));
        Self {
            news,
            articles,
            social,
            blender,
            analyzer,
        }
    }

    pub async fn run(&self, req: &RunRequest) -> RunReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(%run_id, topics = req.topics.len(), "Starting analysis run");

        let mut items: Vec<ContentItem> = Vec::new();
        let mut details: Vec<ArticleDetail> = Vec::new();

        for topic in &req.topics {
            if req.include_news {
                self.collect_news(topic, req.articles_per_topic, &mut items, &mut details)
                    .await;
            }

            if req.include_social {
                match self.social.search_posts(topic, SOCIAL_POSTS_PER_TOPIC).await {
                    Ok(posts) => {
                        info!(topic, count = posts.len(), "Collected social posts");
                        items.extend(posts);
                    }
                    Err(e) => warn!(topic, error = %e, "Failed to fetch social posts"),
                }
            }
        }

        let analyses = self.analyzer.analyze(&items).await;
        let results = scored_results(&analyses);
        let by_source = aggregate_by_source(&results);
        let global_score = aggregate_global(&results);

        info!(
            %run_id,
            items = analyses.len(),
            scored = results.len(),
            global_score,
            "Analysis run complete"
        );

        RunReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            items: analyses,
            details,
            by_source,
            global_score,
        }
    }

    /// Fetch one topic's headlines and articles. A failed topic leaves
    /// `items`/`details` untouched; a failed article degrades to headline-only.
    async fn collect_news(
        &self,
        topic: &str,
        limit: usize,
        items: &mut Vec<ContentItem>,
        details: &mut Vec<ArticleDetail>,
    ) {
        let headlines = match self.news.headlines(topic, limit).await {
            Ok(headlines) => headlines,
            Err(e) => {
                warn!(topic, error = %e, "Failed to fetch news for topic");
                return;
            }
        };

        for headline in headlines {
            let content = match self.articles.article_text(&headline.link).await {
                Ok(content) => content,
                Err(e) => {
                    warn!(
                        url = headline.link.as_str(),
                        error = %e,
                        "Failed to fetch article, scoring headline only"
                    );
                    String::new()
                }
            };

            items.push(ContentItem {
                source: SourceKind::News,
                text: format!("{}. {}", headline.title, content),
                engagement: 1,
            });

            // Per-article detail path: title and content scored separately.
            match self.blender.blend(&headline.title, &content).await {
                Ok(sentiment) => details.push(ArticleDetail {
                    topic: topic.to_string(),
                    title: headline.title,
                    link: headline.link,
                    sentiment,
                }),
                Err(e) => warn!(
                    url = headline.link.as_str(),
                    error = %e,
                    "Failed to score article detail"
                ),
            }
        }
    }
}
