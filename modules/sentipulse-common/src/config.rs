use std::env;

/// Default hosted inference endpoint for the contextual sentiment model.
const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/cardiffnlp/twitter-xlm-roberta-base-sentiment";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Contextual model
    pub inference_url: String,
    pub inference_api_key: String,

    // Social fetch (optional; posts are skipped without a token)
    pub x_bearer_token: Option<String>,

    // News feed locale (Google News `hl` / `gl` parameters)
    pub news_language: String,
    pub news_country: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            inference_url: env::var("INFERENCE_URL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string()),
            inference_api_key: required_env("INFERENCE_API_KEY"),
            x_bearer_token: env::var("X_BEARER_TOKEN").ok().filter(|t| !t.is_empty()),
            news_language: env::var("NEWS_LANGUAGE").unwrap_or_else(|_| "es-419".to_string()),
            news_country: env::var("NEWS_COUNTRY").unwrap_or_else(|_| "DO".to_string()),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
