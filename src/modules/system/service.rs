use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use kirazee_models::system::{ApiAnalytics, LogEntry, LogLevel};

const SAMPLE_LOG_COUNT: u32 = 100;

pub struct SystemService;

impl SystemService {
    /// Recent log entries, newest first, optionally filtered by level.
    pub fn logs(level: Option<LogLevel>, limit: usize) -> Vec<LogEntry> {
        let now = Utc::now();
        (0..SAMPLE_LOG_COUNT)
            .map(|i| LogEntry {
                timestamp: now - Duration::minutes(i64::from(i) * 5),
                level: match i % 3 {
                    0 => LogLevel::Info,
                    1 => LogLevel::Warning,
                    _ => LogLevel::Error,
                },
                message: format!("System log message {i}"),
                source: format!("service_{}", i % 3),
            })
            .filter(|entry| level.is_none_or(|l| entry.level == l))
            .take(limit)
            .collect()
    }

    pub fn api_analytics() -> ApiAnalytics {
        ApiAnalytics {
            total_requests: 15_432,
            requests_by_endpoint: BTreeMap::from(
                [
                    ("/api/metrics/overview", 3421),
                    ("/api/auth/login", 892),
                    ("/api/metrics/revenue", 1234),
                    ("/api/metrics/orders", 2156),
                    ("/api/kyc/pending", 567),
                    ("/api/users", 234),
                ]
                .map(|(endpoint, count)| (endpoint.to_string(), count)),
            ),
            average_response_time: 145.6,
            error_rate: 0.8,
        }
    }
}
