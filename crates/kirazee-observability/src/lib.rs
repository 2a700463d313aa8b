//! Kirazee Observability
//!
//! Provides configurable observability features including:
//! - Tracing and distributed tracing via OpenTelemetry
//! - Metrics collection via Prometheus
//! - HTTP request/response logging
//!
//! Observability can be compiled out with `--no-default-features`, in which
//! case every export below is a no-op except console logging. At runtime it
//! can be switched off with `OBSERVABILITY_ENABLED=false`.
//!
//! # Examples
//!
//! ```no_run
//! use kirazee_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle as MetricsHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, is_observability_enabled, metrics_app, metrics_middleware,
    track_authorization_check, track_jwt_issued, track_jwt_validation, track_kyc_decision,
    track_login_rate_limited, track_user_created, track_user_deactivated,
    track_user_login_failure, track_user_login_success,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle; never constructed.
    pub type MetricsHandle = ();

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// Console logging only when the feature is compiled out
    pub fn init_tracing() {
        crate::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> Option<MetricsHandle> {
        None
    }

    pub fn metrics_app(_handle: MetricsHandle) -> Router {
        Router::new()
    }

    pub fn track_user_created(_role: &str) {}
    pub fn track_user_deactivated(_role: &str) {}
    pub fn track_user_login_success(_role: &str) {}
    pub fn track_user_login_failure(_reason: &str) {}
    pub fn track_login_rate_limited() {}
    pub fn track_jwt_issued() {}
    pub fn track_jwt_validation(_success: bool) {}
    pub fn track_authorization_check(_allowed: bool, _role: &str, _permission: &str) {}
    pub fn track_kyc_decision(_status: &str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
