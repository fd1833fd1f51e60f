use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sentipulse_common::Config;
use sentipulse_engine::{
    ContextualClassifier, HuggingFaceClassifier, HybridBlender, ScoringConfig, VaderScorer,
};
use sentipulse_scout::article::HttpArticleScraper;
use sentipulse_scout::feeds::GoogleNewsSource;
use sentipulse_scout::run::{RunRequest, Scout};
use sentipulse_scout::social::{NoopSocialFetcher, SocialFetcher, XSearchFetcher};

#[derive(Debug, Parser)]
#[command(name = "sentipulse-scout", about = "Hybrid sentiment analysis over news and social sources")]
struct Args {
    /// Topic query to analyze. Repeat for multiple topics.
    #[arg(long = "topic")]
    topics: Vec<String>,

    /// News articles fetched per topic.
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Skip the news source.
    #[arg(long)]
    no_news: bool,

    /// Include social posts (requires X_BEARER_TOKEN).
    #[arg(long)]
    social: bool,
}

fn default_topics() -> Vec<String> {
    vec![
        "(reforma fiscal OR impuestos) AND \"República Dominicana\"".to_string(),
        "economía dominicana".to_string(),
        "inflación RD".to_string(),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sentipulse=info".parse()?))
        .init();

    let args = Args::parse();

    info!("SentiPulse scout starting...");

    // Load config
    let config = Config::from_env();

    // Build the two scoring engines once; they are shared read-only for the
    // rest of the process.
    let scoring = ScoringConfig::default();
    let lexicon = Arc::new(VaderScorer::new(&scoring));
    let classifier = Arc::new(HuggingFaceClassifier::new(
        &config.inference_url,
        &config.inference_api_key,
        &scoring,
    ));

    // Probe the inference endpoint so a dead or misconfigured model fails the
    // run up front instead of marking every item.
    classifier
        .classify("startup probe")
        .await
        .context("Contextual model unavailable at startup")?;
    info!("Scoring engines ready");

    let blender = Arc::new(HybridBlender::new(lexicon, classifier, scoring));

    let news = Arc::new(GoogleNewsSource::new(
        &config.news_language,
        &config.news_country,
    ));
    let articles = Arc::new(HttpArticleScraper::new());
    let social: Arc<dyn SocialFetcher> = match config.x_bearer_token.as_deref() {
        Some(token) => Arc::new(XSearchFetcher::new(token)),
        None => {
            if args.social {
                info!("X_BEARER_TOKEN not set, social posts will be skipped");
            }
            Arc::new(NoopSocialFetcher)
        }
    };

    let scout = Scout::new(news, articles, social, blender);

    let topics = if args.topics.is_empty() {
        default_topics()
    } else {
        args.topics
    };

    let request = RunRequest {
        topics,
        articles_per_topic: args.limit,
        include_news: !args.no_news,
        include_social: args.social,
    };

    let report = scout.run(&request).await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
