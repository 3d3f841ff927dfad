use crate::config::AppConfig;
use crate::feed::{FeedCache, FeedClient, FeedError, FeedSource};

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub cache: FeedCache,
}

impl AppState {
    pub fn new(source: Box<dyn FeedSource>, config: &AppConfig) -> Self {
        Self {
            cache: FeedCache::new(source, config.cache_ttl),
        }
    }

    /// State backed by the published sheet over HTTP.
    pub fn from_config(config: &AppConfig) -> Result<Self, FeedError> {
        let client = FeedClient::new(config.feed_url.clone(), config.fetch_attempts)?;
        log::info!("Reading facility sheet from {}", client.url());
        Ok(Self::new(Box::new(client), config))
    }
}
