//! Per-IP rate limiting for the login endpoint.
//!
//! Client IPs are resolved with `tower_governor`'s [`SmartIpKeyExtractor`]
//! (`X-Forwarded-For`, `X-Real-IP`, `Forwarded`, then the peer address) and
//! checked against a keyed `governor` limiter held in [`AppState`].

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, RateLimiter, clock::Clock};
use serde_json::json;
use tower_governor::key_extractor::{KeyExtractor, SmartIpKeyExtractor};
use tracing::warn;

use kirazee_config::RateLimitConfig;
use kirazee_observability::track_login_rate_limited;

use crate::state::AppState;

pub type LoginRateLimiter = DefaultKeyedRateLimiter<String>;

/// How often stale client keys are dropped from the limiter.
pub const LIMITER_PURGE_INTERVAL: Duration = Duration::from_secs(60);

const UNKNOWN_CLIENT: &str = "unknown";

pub fn build_login_limiter(config: &RateLimitConfig) -> Arc<LoginRateLimiter> {
    Arc::new(RateLimiter::keyed(config.login_quota()))
}

/// The rate limiting key for a request. Requests whose IP cannot be
/// determined share one bucket.
pub fn client_key<B>(req: &axum::http::Request<B>) -> String {
    SmartIpKeyExtractor
        .extract(req)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|_| UNKNOWN_CLIENT.to_string())
}

fn too_many_requests(retry_after: u64) -> Response {
    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({
            "error": "Too many requests. Please try again later.",
            "retry_after": retry_after,
        })),
    )
        .into_response();

    response
        .headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
    response
}

pub async fn login_rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if !state.rate_limit_config.enabled {
        return next.run(req).await;
    }

    let key = client_key(&req);

    match state.login_limiter.check_key(&key) {
        Ok(()) => next.run(req).await,
        Err(not_until) => {
            let wait = not_until.wait_time_from(state.login_limiter.clock().now());
            // Round up so clients never retry early
            let retry_after = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);

            warn!(client = %key, retry_after, "Login rate limit exceeded");
            track_login_rate_limited();

            too_many_requests(retry_after.max(1))
        }
    }
}

/// Drops limiter state for clients that have fully replenished.
pub fn spawn_limiter_purge(limiter: Arc<LoginRateLimiter>) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(LIMITER_PURGE_INTERVAL).await;
            limiter.retain_recent();
            limiter.shrink_to_fit();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_client_key_prefers_forwarded_for() {
        let req = axum::http::Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_key(&req), "203.0.113.7");
    }

    #[test]
    fn test_client_key_falls_back_to_unknown() {
        let req = axum::http::Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_key(&req), UNKNOWN_CLIENT);
    }

    #[test]
    fn test_limiter_allows_burst_then_rejects() {
        let limiter = build_login_limiter(&RateLimitConfig::default());
        let key = "198.51.100.1".to_string();

        for _ in 0..5 {
            assert!(limiter.check_key(&key).is_ok());
        }
        assert!(limiter.check_key(&key).is_err());
        assert!(limiter.check_key(&"198.51.100.2".to_string()).is_ok());
    }
}
