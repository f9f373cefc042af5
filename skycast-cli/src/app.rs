//! Session state owned by the CLI.
//!
//! The core components are pure functions over explicit inputs; anything
//! that lives across pipeline calls (here, the news cache) is held in this
//! struct rather than in module-level globals.

use chrono::Utc;
use skycast_core::{Config, ContentCache, NewsClient, NewsItem};

pub struct AppState {
    news: ContentCache<NewsClient>,
    news_ttl_secs: i64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let client = NewsClient::new(
            config.news_api_key().map(str::to_owned),
            config.request_timeout(),
        );

        Self {
            news: ContentCache::new(client),
            news_ttl_secs: config.news_ttl_secs,
        }
    }

    /// Headlines through the TTL cache. Never fails; a broken or
    /// unconfigured upstream yields the bundled fallback set.
    pub async fn headlines(&mut self, force_refresh: bool) -> Vec<NewsItem> {
        self.news
            .get(Utc::now(), self.news_ttl_secs, force_refresh)
            .await
    }
}
