//! System log and API analytics models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kirazee_core::params::ParamChoice;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LOGS_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl ParamChoice for LogLevel {
    const ALL: &'static [Self] = &[LogLevel::Info, LogLevel::Warning, LogLevel::Error];

    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogsResponse {
    pub logs: Vec<LogEntry>,
}

/// Raw query string for `/api/system/logs`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogsQuery {
    /// info, warning or error
    pub level: Option<String>,
    /// 1 to 1000 (default 100)
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiAnalytics {
    pub total_requests: u64,
    pub requests_by_endpoint: BTreeMap<String, u64>,
    /// Milliseconds
    pub average_response_time: f64,
    /// Percentage of requests that failed
    pub error_rate: f64,
}
