//! Time-bounded cache for auxiliary external content.
//!
//! Single-slot: one payload per cache, replaced wholesale on every refresh.
//! Fetch failures never escape `get` — the source's fallback dataset is
//! stored and served instead, so a broken upstream is retried at most once
//! per TTL window.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::SkycastError;

/// A fetchable payload with a static fallback. The cache is generic over
/// this seam so tests (and future payload kinds) can swap the source out.
#[async_trait]
pub trait ContentSource: Send + Sync {
    type Item: Clone + Send + Sync;

    async fn fetch(&self) -> Result<Vec<Self::Item>, SkycastError>;

    /// Locally-defined substitute used whenever `fetch` cannot succeed.
    fn fallback(&self) -> Vec<Self::Item>;
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    payload: Vec<T>,
    fetched_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    fn is_fresh(&self, now: DateTime<Utc>, ttl_seconds: i64) -> bool {
        (now - self.fetched_at).num_seconds() < ttl_seconds
    }
}

pub struct ContentCache<S: ContentSource> {
    source: S,
    entry: Option<CacheEntry<S::Item>>,
}

impl<S: ContentSource> ContentCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entry: None,
        }
    }

    /// Returns the cached payload while fresh; otherwise refetches.
    ///
    /// `now` is passed in rather than read from the clock so freshness is
    /// deterministic under test. Never fails: any fetch error is converted
    /// into the fallback payload, which is cached like a normal result.
    pub async fn get(
        &mut self,
        now: DateTime<Utc>,
        ttl_seconds: i64,
        force_refresh: bool,
    ) -> Vec<S::Item> {
        if !force_refresh {
            if let Some(entry) = &self.entry {
                if entry.is_fresh(now, ttl_seconds) {
                    debug!("serving cached payload");
                    return entry.payload.clone();
                }
            }
        }

        let payload = match self.source.fetch().await {
            Ok(items) => items,
            Err(err) => {
                warn!("content fetch failed, serving fallback: {err}");
                self.source.fallback()
            }
        };

        self.entry = Some(CacheEntry {
            payload: payload.clone(),
            fetched_at: now,
        });
        payload
    }

    /// Discards the current entry; the next `get` always attempts a fetch.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentSource for CountingSource {
        type Item = String;

        async fn fetch(&self) -> Result<Vec<String>, SkycastError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SkycastError::upstream("newsapi", "always down"))
            } else {
                Ok(vec!["live".to_string()])
            }
        }

        fn fallback(&self) -> Vec<String> {
            vec!["fallback".to_string()]
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn second_get_within_ttl_serves_cache_without_fetching() {
        let mut cache = ContentCache::new(CountingSource::new(false));

        let first = cache.get(t0(), 3600, false).await;
        let second = cache
            .get(t0() + chrono::Duration::seconds(3599), 3600, false)
            .await;

        assert_eq!(first, vec!["live"]);
        assert_eq!(second, vec!["live"]);
        assert_eq!(cache.source.calls(), 1);
    }

    #[tokio::test]
    async fn expired_entry_triggers_refetch() {
        let mut cache = ContentCache::new(CountingSource::new(false));

        cache.get(t0(), 3600, false).await;
        cache
            .get(t0() + chrono::Duration::seconds(3600), 3600, false)
            .await;

        assert_eq!(cache.source.calls(), 2);
    }

    #[tokio::test]
    async fn force_refresh_ignores_freshness() {
        let mut cache = ContentCache::new(CountingSource::new(false));

        cache.get(t0(), 3600, false).await;
        cache.get(t0(), 3600, true).await;

        assert_eq!(cache.source.calls(), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_fetch_regardless_of_elapsed_time() {
        let mut cache = ContentCache::new(CountingSource::new(false));

        cache.get(t0(), 3600, false).await;
        cache.get(t0(), 3600, false).await;
        assert_eq!(cache.source.calls(), 1);

        cache.invalidate();
        cache.get(t0(), 3600, false).await;
        assert_eq!(cache.source.calls(), 2);
    }

    #[tokio::test]
    async fn failing_source_always_yields_fallback() {
        let mut cache = ContentCache::new(CountingSource::new(true));

        let got = cache.get(t0(), 3600, true).await;
        assert_eq!(got, vec!["fallback"]);

        let got = cache
            .get(t0() + chrono::Duration::seconds(7200), 3600, true)
            .await;
        assert_eq!(got, vec!["fallback"]);
    }

    #[tokio::test]
    async fn fallback_is_cached_so_failures_are_not_retried_within_ttl() {
        let mut cache = ContentCache::new(CountingSource::new(true));

        cache.get(t0(), 3600, false).await;
        let got = cache
            .get(t0() + chrono::Duration::seconds(60), 3600, false)
            .await;

        assert_eq!(got, vec!["fallback"]);
        assert_eq!(cache.source.calls(), 1);
    }
}
