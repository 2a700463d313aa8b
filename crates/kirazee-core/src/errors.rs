//! Application error type.
//!
//! Every handler returns `Result<_, AppError>`. Client errors (4xx) carry their
//! message to the caller after [`redact_sensitive`] has scrubbed it; server
//! errors (5xx) are logged in full and replaced by a generic body.

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Body returned for every 5xx response.
pub const GENERIC_SERVER_ERROR: &str = "An internal server error occurred. Please try again later.";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(message))
    }

    pub fn forbidden(message: String) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow!(message))
    }

    pub fn internal_error(message: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow!(message))
    }

    /// The message a client would see for this error.
    pub fn public_message(&self) -> String {
        if self.status.is_server_error() {
            GENERIC_SERVER_ERROR.to_string()
        } else {
            redact_sensitive(&self.error.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status.as_u16(),
                error = ?self.error,
                "Server error"
            );

            let body = Json(json!({
                "error": GENERIC_SERVER_ERROR,
                "status_code": self.status.as_u16(),
            }));
            return (self.status, body).into_response();
        }

        let body = Json(json!({
            "error": self.public_message()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

const CONNECTION_SCHEMES: [&str; 5] = ["postgres", "postgresql", "mysql", "sqlite", "redis"];

/// Strips source paths, line numbers, SQL fragments and connection strings
/// from a message before it leaves the server.
pub fn redact_sensitive(message: &str) -> String {
    let words: Vec<&str> = message.split_whitespace().collect();
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        let word = words[i];

        if word.eq_ignore_ascii_case("line")
            && words
                .get(i + 1)
                .is_some_and(|next| next.starts_with(|c: char| c.is_ascii_digit()))
        {
            out.push(word.to_string());
            out.push("[redacted]".to_string());
            i += 2;
            continue;
        }

        if word.eq_ignore_ascii_case("select") {
            if let Some(from) = find_keyword(&words, i + 1, "from") {
                out.push(word.to_string());
                out.push("[redacted]".to_string());
                out.push(words[from].to_string());
                i = from + 1;
                continue;
            }
        }

        if word.eq_ignore_ascii_case("insert")
            && words
                .get(i + 1)
                .is_some_and(|next| next.eq_ignore_ascii_case("into"))
        {
            if let Some(values) = find_keyword(&words, i + 2, "values") {
                out.push(word.to_string());
                out.push(words[i + 1].to_string());
                out.push("[redacted]".to_string());
                out.push(words[values].to_string());
                i = values + 1;
                continue;
            }
        }

        if let Some((scheme, _)) = word.split_once("://") {
            let scheme = scheme.trim_start_matches(|c: char| !c.is_ascii_alphanumeric());
            if CONNECTION_SCHEMES
                .iter()
                .any(|s| scheme.eq_ignore_ascii_case(s))
            {
                out.push(format!("{}://[redacted]", scheme));
                i += 1;
                continue;
            }
        }

        if is_source_path(word) {
            out.push("[file]".to_string());
            i += 1;
            continue;
        }

        out.push(word.to_string());
        i += 1;
    }

    out.join(" ")
}

fn find_keyword(words: &[&str], start: usize, keyword: &str) -> Option<usize> {
    (start..words.len()).find(|&idx| words[idx].eq_ignore_ascii_case(keyword))
}

fn is_source_path(word: &str) -> bool {
    if !(word.contains('/') || word.contains('\\')) {
        return false;
    }
    let trimmed = word.trim_end_matches(|c: char| c.is_ascii_digit() || ":,;)".contains(c));
    trimmed.ends_with(".rs") || trimmed.ends_with(".py")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_client_error_keeps_message() {
        let response = AppError::bad_request(anyhow!("Username already exists")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Username already exists");
        assert!(body.get("status_code").is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_generic() {
        let response =
            AppError::internal(anyhow!("connection refused at sqlite://kirazee.db")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], GENERIC_SERVER_ERROR);
        assert_eq!(body["status_code"], 500);
    }

    #[tokio::test]
    async fn test_unauthorized_and_forbidden_status() {
        let unauthorized = AppError::unauthorized("No token provided".to_string());
        assert_eq!(unauthorized.status, StatusCode::UNAUTHORIZED);

        let forbidden = AppError::forbidden("Access denied".to_string()).into_response();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(forbidden).await["error"], "Access denied");
    }

    #[test]
    fn test_from_anyhow_defaults_to_internal() {
        let err: AppError = anyhow!("boom").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn test_redact_file_paths_and_lines() {
        let redacted = redact_sensitive("panicked at src/modules/users/service.rs:42:7 on line 42");
        assert_eq!(redacted, "panicked at [file] on line [redacted]");
    }

    #[test]
    fn test_redact_sql() {
        assert_eq!(
            redact_sensitive("failed: SELECT id, password_hash FROM users"),
            "failed: SELECT [redacted] FROM users"
        );
        assert_eq!(
            redact_sensitive("failed: INSERT INTO users (id) VALUES (?)"),
            "failed: INSERT INTO [redacted] VALUES (?)"
        );
    }

    #[test]
    fn test_redact_connection_strings() {
        assert_eq!(
            redact_sensitive("cannot reach postgresql://admin:secret@db:5432/app"),
            "cannot reach postgresql://[redacted]"
        );
    }

    #[test]
    fn test_redact_leaves_plain_messages() {
        assert_eq!(
            redact_sensitive("Invalid role. Must be one of: super_admin, manager"),
            "Invalid role. Must be one of: super_admin, manager"
        );
    }
}
