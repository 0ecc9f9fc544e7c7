use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::metrics::{CACHE_HITS_TOTAL, CACHE_MISSES_TOTAL};

/// TTL cache in front of a paginated list endpoint. Mutations on the backing
/// resource must call `invalidate_all` so readers never see stale pages
/// longer than one write.
#[derive(Clone)]
pub struct ListCache {
    name: &'static str,
    inner: Cache<String, serde_json::Value>,
}

impl ListCache {
    pub fn new(name: &'static str, ttl_secs: u64, max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_secs))
            .max_capacity(max_capacity)
            .build();
        Self { name, inner }
    }

    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        match self.inner.get(key).await {
            Some(v) => {
                CACHE_HITS_TOTAL.with_label_values(&[self.name]).inc();
                debug!(cache = self.name, key, "cache_hit");
                Some(v)
            }
            None => {
                CACHE_MISSES_TOTAL.with_label_values(&[self.name]).inc();
                None
            }
        }
    }

    pub async fn insert(&self, key: String, value: serde_json::Value) {
        self.inner.insert(key, value).await;
    }

    pub async fn invalidate_all(&self) {
        self.inner.invalidate_all();
        // Make the invalidation visible to the next reader immediately
        self.inner.run_pending_tasks().await;
        debug!(cache = self.name, "cache_invalidated");
    }
}

/// Cache key for a list page.
pub fn page_key(page: u32, per_page: u32) -> String {
    format!("page={}:per_page={}", page, per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_then_get_returns_value() {
        let cache = ListCache::new("test", 60, 16);
        cache.insert(page_key(1, 5), json!({"total": 3})).await;
        let got = cache.get(&page_key(1, 5)).await;
        assert_eq!(got, Some(json!({"total": 3})));
    }

    #[tokio::test]
    async fn different_pages_are_distinct_keys() {
        let cache = ListCache::new("test", 60, 16);
        cache.insert(page_key(1, 5), json!(1)).await;
        assert!(cache.get(&page_key(2, 5)).await.is_none());
        assert!(cache.get(&page_key(1, 10)).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_all_clears_every_page() {
        let cache = ListCache::new("test", 60, 16);
        cache.insert(page_key(1, 5), json!(1)).await;
        cache.insert(page_key(2, 5), json!(2)).await;
        cache.invalidate_all().await;
        assert!(cache.get(&page_key(1, 5)).await.is_none());
        assert!(cache.get(&page_key(2, 5)).await.is_none());
    }
}
