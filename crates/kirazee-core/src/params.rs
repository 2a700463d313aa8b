//! Query parameter parsing.
//!
//! Query strings are extracted as raw `Option<String>` fields and converted
//! here so every endpoint reports bad input with the same 400 messages:
//!
//! - `Invalid status. Must be one of: pending, completed, cancelled`
//! - `Invalid limit: must be an integer`
//! - `Invalid limit: must be at least 1`
//! - `Invalid limit: must not exceed 1000`
//!
//! Missing or empty parameters parse to `None` so callers can apply defaults.

use anyhow::anyhow;

use crate::errors::AppError;
use crate::sanitize::sanitize_string;

const QUERY_PARAM_MAX_LENGTH: usize = 100;

/// A closed set of accepted values for a query parameter.
pub trait ParamChoice: Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;
}

pub fn parse_choice<T: ParamChoice>(raw: Option<&str>, name: &str) -> Result<Option<T>, AppError> {
    let Some(raw) = raw.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let value = sanitize_string(raw, QUERY_PARAM_MAX_LENGTH).map_err(|e| {
        AppError::bad_request(anyhow!("Invalid {}: {}", name, e.error))
    })?;

    T::ALL
        .iter()
        .copied()
        .find(|choice| choice.as_str() == value)
        .map(Some)
        .ok_or_else(|| {
            let allowed = T::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            AppError::bad_request(anyhow!("Invalid {}. Must be one of: {}", name, allowed))
        })
}

pub fn parse_int(
    raw: Option<&str>,
    name: &str,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<Option<i64>, AppError> {
    let Some(raw) = raw.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::bad_request(anyhow!("Invalid {}: must be an integer", name)))?;

    if let Some(min) = min {
        if value < min {
            return Err(AppError::bad_request(anyhow!(
                "Invalid {}: must be at least {}",
                name,
                min
            )));
        }
    }

    if let Some(max) = max {
        if value > max {
            return Err(AppError::bad_request(anyhow!(
                "Invalid {}: must not exceed {}",
                name,
                max
            )));
        }
    }

    Ok(Some(value))
}
