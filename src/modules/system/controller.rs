use axum::{Json, extract::Query};
use tracing::instrument;

use kirazee_core::AppError;
use kirazee_core::params::{parse_choice, parse_int};
use kirazee_models::auth::ErrorResponse;
use kirazee_models::dashboard::MAX_PAGE_LIMIT;
use kirazee_models::system::{ApiAnalytics, DEFAULT_LOGS_LIMIT, LogLevel, LogsQuery, LogsResponse};

use crate::middleware::auth::{RequireViewApiAnalytics, RequireViewSystemLogs};
use crate::modules::system::service::SystemService;

/// Recent system logs
#[utoipa::path(
    get,
    path = "/api/system/logs",
    params(LogsQuery),
    responses(
        (status = 200, description = "Log entries, newest first", body = LogsResponse),
        (status = 400, description = "Invalid level or limit", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires view_system_logs", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "System"
)]
#[instrument(skip(_auth))]
pub async fn get_logs(
    RequireViewSystemLogs(_auth): RequireViewSystemLogs,
    Query(query): Query<LogsQuery>,
) -> Result<Json<LogsResponse>, AppError> {
    let level = parse_choice::<LogLevel>(query.level.as_deref(), "level")?;
    let limit = parse_int(query.limit.as_deref(), "limit", Some(1), Some(MAX_PAGE_LIMIT))?
        .unwrap_or(DEFAULT_LOGS_LIMIT);

    // Bounded to 1..=1000 above
    let limit = usize::try_from(limit).unwrap_or_default();

    Ok(Json(LogsResponse {
        logs: SystemService::logs(level, limit),
    }))
}

/// Request volume, latency and error rate
#[utoipa::path(
    get,
    path = "/api/system/api-analytics",
    responses(
        (status = 200, description = "API analytics", body = ApiAnalytics),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires view_api_analytics", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "System"
)]
#[instrument(skip(_auth))]
pub async fn get_api_analytics(
    RequireViewApiAnalytics(_auth): RequireViewApiAnalytics,
) -> Json<ApiAnalytics> {
    Json(SystemService::api_analytics())
}
