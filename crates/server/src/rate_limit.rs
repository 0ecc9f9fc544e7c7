use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::auth::ServerState;
use crate::errors::ApiError;
use crate::metrics::RATE_LIMITED_TOTAL;

#[derive(Debug)]
pub struct TokenBucket {
    capacity: f64,
    tokens: f64,
    refill_per_sec: f64,
    last_refill: Instant,
}

impl TokenBucket {
    pub fn new(capacity: u64, refill_per_sec: f64) -> Self {
        Self {
            capacity: capacity as f64,
            tokens: capacity as f64,
            refill_per_sec,
            last_refill: Instant::now(),
        }
    }

    pub fn try_acquire(&mut self, tokens: f64) -> bool {
        self.refill();

        if self.tokens >= tokens {
            self.tokens -= tokens;
            debug!("token acquired, remaining: {:.2}", self.tokens);
            true
        } else {
            warn!("rate limit exceeded, tokens: {:.2}, requested: {:.2}", self.tokens, tokens);
            false
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);
        let tokens_to_add = elapsed.as_secs_f64() * self.refill_per_sec;

        if tokens_to_add > 0.0 {
            self.tokens = (self.tokens + tokens_to_add).min(self.capacity);
            self.last_refill = now;
        }
    }
}

/// Per-client limiter: one bucket per client key, created on first sight.
#[derive(Clone)]
pub struct RateLimiter {
    buckets: Arc<DashMap<String, Arc<Mutex<TokenBucket>>>>,
    requests_per_minute: u64,
    burst: u64,
    enabled: bool,
}

impl RateLimiter {
    pub fn new(cfg: &configs::RateLimitConfig) -> Self {
        Self {
            buckets: Arc::new(DashMap::new()),
            requests_per_minute: cfg.requests_per_minute,
            burst: cfg.burst,
            enabled: cfg.enabled,
        }
    }

    pub async fn check(&self, client: &str) -> bool {
        if !self.enabled {
            return true;
        }
        let bucket = self
            .buckets
            .entry(client.to_string())
            .or_insert_with(|| {
                Arc::new(Mutex::new(TokenBucket::new(
                    self.burst,
                    self.requests_per_minute as f64 / 60.0,
                )))
            })
            .clone();
        let mut bucket = bucket.lock().await;
        bucket.try_acquire(1.0)
    }
}

/// Best-effort client key: first X-Forwarded-For hop, then the peer address.
fn client_key(req: &Request) -> String {
    if let Some(fwd) = req.headers().get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = fwd.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware for the hot create routes; rejects with 429 when the client's
/// bucket is dry.
pub async fn limit_create(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let client = client_key(&req);
    if state.limiter.check(&client).await {
        Ok(next.run(req).await)
    } else {
        RATE_LIMITED_TOTAL.inc();
        Err(ApiError::new(axum::http::StatusCode::TOO_MANY_REQUESTS, "rate limit exceeded").into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Duration};

    #[tokio::test]
    async fn test_token_bucket_basic() {
        let mut bucket = TokenBucket::new(10, 5.0);

        assert!(bucket.try_acquire(5.0));
        assert!(bucket.try_acquire(5.0));

        // Should fail when bucket is empty
        assert!(!bucket.try_acquire(1.0));
    }

    #[tokio::test]
    async fn test_token_bucket_refill() {
        let mut bucket = TokenBucket::new(10, 10.0); // 10 tokens per second

        assert!(bucket.try_acquire(10.0));
        assert!(!bucket.try_acquire(1.0));

        sleep(Duration::from_millis(1100)).await;

        // Should have refilled
        assert!(bucket.try_acquire(10.0));
    }

    #[tokio::test]
    async fn test_rate_limiter_exhausts_per_client() {
        let cfg = configs::RateLimitConfig { requests_per_minute: 5, burst: 2, enabled: true };
        let limiter = RateLimiter::new(&cfg);

        assert!(limiter.check("10.0.0.1").await);
        assert!(limiter.check("10.0.0.1").await);
        assert!(!limiter.check("10.0.0.1").await);

        // A different client gets its own bucket
        assert!(limiter.check("10.0.0.2").await);
    }

    #[tokio::test]
    async fn test_rate_limiter_disabled() {
        let cfg = configs::RateLimitConfig { requests_per_minute: 1, burst: 1, enabled: false };
        let limiter = RateLimiter::new(&cfg);

        for _ in 0..100 {
            assert!(limiter.check("10.0.0.1").await);
        }
    }
}
