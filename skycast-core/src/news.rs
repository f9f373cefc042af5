//! Headline fetching for the news sidebar.
//!
//! The client is an optional upstream: without a configured API key every
//! fetch fails with `ConfigurationMissing`, which the content cache converts
//! into the bundled fallback headlines. News failures are never user-visible.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    cache::ContentSource,
    classify::icon_for_headline,
    error::SkycastError,
    model::NewsItem,
};

const PROVIDER: &str = "newsapi";
const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const PAGE_SIZE: &str = "6";

#[derive(Debug, Clone)]
pub struct NewsClient {
    api_key: Option<String>,
    base_url: String,
    query: String,
    http: Client,
}

impl NewsClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        Self::with_base_url(api_key, timeout, DEFAULT_BASE_URL.to_string())
    }

    /// Same as [`new`](Self::new) with an overridable endpoint, for tests.
    pub fn with_base_url(api_key: Option<String>, timeout: Duration, base_url: String) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key,
            base_url,
            query: "weather".to_string(),
            http,
        }
    }
}

#[async_trait]
impl ContentSource for NewsClient {
    type Item = NewsItem;

    async fn fetch(&self) -> Result<Vec<NewsItem>, SkycastError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SkycastError::ConfigurationMissing("news API key"))?;

        let url = format!("{}/everything", self.base_url);
        debug!("requesting headlines for '{}'", self.query);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", self.query.as_str()),
                ("apiKey", api_key),
                ("pageSize", PAGE_SIZE),
                ("sortBy", "publishedAt"),
            ])
            .send()
            .await
            .map_err(|e| {
                SkycastError::upstream(PROVIDER, format!("failed to send headlines request: {e}"))
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(SkycastError::upstream(
                PROVIDER,
                format!("headlines request returned status {status}"),
            ));
        }

        let parsed: NaResponse = res.json().await.map_err(|e| {
            SkycastError::upstream(PROVIDER, format!("failed to parse headlines JSON: {e}"))
        })?;

        Ok(parsed.articles.into_iter().map(NewsItem::from).collect())
    }

    fn fallback(&self) -> Vec<NewsItem> {
        fallback_headlines()
    }
}

#[derive(Debug, Deserialize)]
struct NaResponse {
    #[serde(default)]
    articles: Vec<NaArticle>,
}

#[derive(Debug, Deserialize)]
struct NaSource {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NaArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    source: Option<NaSource>,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
}

impl From<NaArticle> for NewsItem {
    fn from(article: NaArticle) -> Self {
        let title = placeholder(article.title, "Untitled story");
        let icon = icon_for_headline(&title).to_string();

        NewsItem {
            description: placeholder(article.description, "No summary available."),
            body: placeholder(article.content, "Full story available from the source."),
            url: placeholder(article.url, "https://newsapi.org"),
            source: placeholder(article.source.and_then(|s| s.name), "Newsroom"),
            published_at: article.published_at,
            title,
            icon,
        }
    }
}

/// Delivered items never carry empty fields; blank upstream values count as
/// missing.
fn placeholder(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Static editorial dataset served whenever live headlines cannot be
/// fetched.
#[must_use]
pub fn fallback_headlines() -> Vec<NewsItem> {
    let stories = [
        (
            "Cyclone season outlook released for coastal regions",
            "Forecasters expect an average season with two to four severe systems.",
        ),
        (
            "Heavy rain eases reservoir levels after dry spring",
            "Water authorities report storage back above seasonal norms.",
        ),
        (
            "Snowpack survey points to strong start for alpine resorts",
            "Early-season depths are tracking well ahead of last year.",
        ),
        (
            "Heatwave preparedness campaign launches ahead of summer",
            "Health agencies urge residents to plan for extended hot spells.",
        ),
        (
            "Storm chasers capture rare twin waterspouts offshore",
            "The display lasted nearly twenty minutes before dissipating.",
        ),
        (
            "New climate dashboard tracks seasonal temperature records",
            "The public portal updates daily with station observations.",
        ),
    ];

    stories
        .into_iter()
        .map(|(title, description)| NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            body: "Full story available from the source.".to_string(),
            url: "https://newsapi.org".to_string(),
            source: "Skycast Newsroom".to_string(),
            published_at: None,
            icon: icon_for_headline(title).to_string(),
        })
        .collect()
}
