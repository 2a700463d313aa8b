use std::env;

pub const DEFAULT_JWT_SECRET: &str = "jwt-secret-key-change-in-production";
pub const DEFAULT_EXPIRATION_HOURS: i64 = 24;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let hours = env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(DEFAULT_EXPIRATION_HOURS);

        Self {
            secret: env::var("JWT_SECRET_KEY").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            access_token_expiry: hours * 3600,
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}
