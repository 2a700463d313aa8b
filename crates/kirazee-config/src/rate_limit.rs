//! Rate limiting configuration for the login endpoint.
//!
//! Login attempts are limited per client IP to slow down credential stuffing.
//!
//! # Configuration
//!
//! - `RATE_LIMIT_ENABLED`: Set to `false` or `0` to disable limiting (default: enabled)
//! - `RATE_LIMIT_LOGIN_MAX_ATTEMPTS`: Attempts allowed per window (default: 5)
//! - `RATE_LIMIT_LOGIN_WINDOW_SECONDS`: Window length in seconds (default: 60)
//!
//! # Rate Limiting Strategy
//!
//! The limiter is a GCRA token bucket from the Governor crate:
//!
//! - The bucket holds `login_max_attempts` tokens
//! - One token is replenished per full window
//! - Each attempt consumes one token and is rejected when none are left
//!
//! A client that spends its whole budget at once gets nothing back until the
//! window has passed, so no more than `login_max_attempts` attempts fit in
//! any single window.
//!
//! # Example
//!
//! ```ignore
//! use kirazee_config::RateLimitConfig;
//!
//! let config = RateLimitConfig::from_env();
//! let quota = config.login_quota();
//! ```

use governor::Quota;
use std::num::NonZeroU32;
use std::time::Duration;

/// Rate limit configuration for the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Whether login attempts are limited at all.
    pub enabled: bool,

    /// Attempts allowed from one IP within a window.
    pub login_max_attempts: u32,

    /// Window length in seconds.
    pub login_window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            login_max_attempts: 5,
            login_window_seconds: 60,
        }
    }
}

impl RateLimitConfig {
    /// Creates a new `RateLimitConfig` from environment variables.
    ///
    /// Falls back to default values if environment variables are not set
    /// or cannot be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            enabled: std::env::var("RATE_LIMIT_ENABLED")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.enabled),
            login_max_attempts: std::env::var("RATE_LIMIT_LOGIN_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.login_max_attempts),
            login_window_seconds: std::env::var("RATE_LIMIT_LOGIN_WINDOW_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.login_window_seconds),
        }
    }

    /// A configuration with limiting switched off.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Builds the Governor quota for login attempts.
    ///
    /// Zero values are clamped to one attempt per one second so a bad
    /// environment never produces an unusable limiter.
    #[must_use]
    pub fn login_quota(&self) -> Quota {
        let burst = NonZeroU32::new(self.login_max_attempts).unwrap_or(NonZeroU32::MIN);
        let window = Duration::from_secs(self.login_window_seconds.max(1));

        Quota::with_period(window)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst)
    }
}
