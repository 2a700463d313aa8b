//! Input sanitisation for free-text fields and search queries.

use anyhow::anyhow;

use crate::errors::AppError;

pub const DEFAULT_MAX_LENGTH: usize = 255;
pub const SEARCH_QUERY_MAX_LENGTH: usize = 200;

const DANGEROUS_SEARCH_PATTERNS: [&str; 6] =
    ["--", ";", "<script", "javascript:", "onerror=", "onload="];

/// Trims `value`, rejects it if longer than `max_length` characters and drops
/// control characters other than tab, newline and carriage return.
pub fn sanitize_string(value: &str, max_length: usize) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.chars().count() > max_length {
        return Err(AppError::bad_request(anyhow!(
            "Input exceeds maximum length of {}",
            max_length
        )));
    }

    Ok(trimmed
        .chars()
        .filter(|c| !is_stripped_control(*c))
        .collect())
}

fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}

/// Sanitises a free-text search term and removes fragments commonly used for
/// SQL or script injection. Empty input yields an empty string.
pub fn sanitize_search_query(query: &str) -> Result<String, AppError> {
    if query.is_empty() {
        return Ok(String::new());
    }

    let mut cleaned = sanitize_string(query, SEARCH_QUERY_MAX_LENGTH)?;
    for pattern in DANGEROUS_SEARCH_PATTERNS {
        cleaned = remove_ignore_ascii_case(&cleaned, pattern);
    }

    Ok(cleaned.trim().to_string())
}

fn remove_ignore_ascii_case(haystack: &str, pattern: &str) -> String {
    let lower = haystack.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut cursor = 0;

    while let Some(offset) = lower[cursor..].find(pattern) {
        let start = cursor + offset;
        out.push_str(&haystack[cursor..start]);
        cursor = start + pattern.len();
    }
    out.push_str(&haystack[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_string("  hello  ", 255).unwrap(), "hello");
    }

    #[test]
    fn test_sanitize_removes_control_characters() {
        assert_eq!(
            sanitize_string("ab\u{0}c\u{7F}d\u{1B}", 255).unwrap(),
            "abcd"
        );
        assert_eq!(sanitize_string("line\nnext\tcol", 255).unwrap(), "line\nnext\tcol");
    }

    #[test]
    fn test_sanitize_rejects_long_input() {
        let err = sanitize_string(&"x".repeat(501), 500).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "Input exceeds maximum length of 500");
    }

    #[test]
    fn test_sanitize_length_counts_characters() {
        assert!(sanitize_string(&"é".repeat(10), 10).is_ok());
    }

    #[test]
    fn test_search_query_strips_injection_patterns() {
        assert_eq!(
            sanitize_search_query("admin'; DROP TABLE users --").unwrap(),
            "admin' DROP TABLE users"
        );
        assert_eq!(
            sanitize_search_query("<SCRIPT>alert(1)").unwrap(),
            ">alert(1)"
        );
        assert_eq!(sanitize_search_query("JavaScript:void").unwrap(), "void");
    }

    #[test]
    fn test_search_query_empty() {
        assert_eq!(sanitize_search_query("").unwrap(), "");
        assert_eq!(sanitize_search_query("   ").unwrap(), "");
    }

    #[test]
    fn test_search_query_max_length() {
        assert!(sanitize_search_query(&"a".repeat(200)).is_ok());
        assert!(sanitize_search_query(&"a".repeat(201)).is_err());
    }
}
