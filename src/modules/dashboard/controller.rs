use axum::{
    Json,
    extract::Query,
};
use tracing::instrument;

use kirazee_core::AppError;
use kirazee_core::params::{parse_choice, parse_int};
use kirazee_models::auth::ErrorResponse;
use kirazee_models::dashboard::{
    BusinessMetrics, CustomerMetrics, DEFAULT_ORDERS_LIMIT, DeliveryMetrics, MAX_PAGE_LIMIT,
    OrderStatus, OrdersQuery, OrdersResponse, OverviewResponse, RevenueQuery, RevenueResponse,
    TimeRange,
};

use crate::middleware::auth::{
    AuthUser, RequireViewBusinesses, RequireViewCustomers, RequireViewDeliveryPartners,
    RequireViewOrders, RequireViewRevenue,
};
use crate::modules::dashboard::service::DashboardService;

/// Overview metrics filtered to what the caller's role may view
#[utoipa::path(
    get,
    path = "/api/metrics/overview",
    responses(
        (status = 200, description = "Visible overview sections", body = OverviewResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Metrics"
)]
#[instrument(skip(auth_user), fields(role = %auth_user.0.role))]
pub async fn get_overview(auth_user: AuthUser) -> Json<OverviewResponse> {
    Json(DashboardService::overview(auth_user.0.role))
}

/// Daily revenue for a time window
#[utoipa::path(
    get,
    path = "/api/metrics/revenue",
    params(RevenueQuery),
    responses(
        (status = 200, description = "Revenue data", body = RevenueResponse),
        (status = 400, description = "Invalid time_range", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires view_revenue", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Metrics"
)]
#[instrument(skip(_auth))]
pub async fn get_revenue(
    RequireViewRevenue(_auth): RequireViewRevenue,
    Query(query): Query<RevenueQuery>,
) -> Result<Json<RevenueResponse>, AppError> {
    let time_range = parse_choice::<TimeRange>(query.time_range.as_deref(), "time_range")?
        .unwrap_or_default();
    Ok(Json(DashboardService::revenue(time_range)))
}

/// Recent orders with status filter and pagination
#[utoipa::path(
    get,
    path = "/api/metrics/orders",
    params(OrdersQuery),
    responses(
        (status = 200, description = "Orders page", body = OrdersResponse),
        (status = 400, description = "Invalid status, limit or offset", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires view_orders", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Metrics"
)]
#[instrument(skip(_auth))]
pub async fn get_orders(
    RequireViewOrders(_auth): RequireViewOrders,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<OrdersResponse>, AppError> {
    let status = parse_choice::<OrderStatus>(query.status.as_deref(), "status")?;
    let limit = parse_int(query.limit.as_deref(), "limit", Some(1), Some(MAX_PAGE_LIMIT))?
        .unwrap_or(DEFAULT_ORDERS_LIMIT);
    let offset = parse_int(query.offset.as_deref(), "offset", Some(0), None)?.unwrap_or(0);

    Ok(Json(DashboardService::orders(status, limit, offset)))
}

/// Business counts and category breakdown
#[utoipa::path(
    get,
    path = "/api/metrics/businesses",
    responses(
        (status = 200, description = "Business metrics", body = BusinessMetrics),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires view_businesses", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Metrics"
)]
#[instrument(skip(_auth))]
pub async fn get_business_metrics(
    RequireViewBusinesses(_auth): RequireViewBusinesses,
) -> Json<BusinessMetrics> {
    Json(DashboardService::businesses())
}

/// Customer counts
#[utoipa::path(
    get,
    path = "/api/metrics/customers",
    responses(
        (status = 200, description = "Customer metrics", body = CustomerMetrics),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires view_customers", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Metrics"
)]
#[instrument(skip(_auth))]
pub async fn get_customer_metrics(
    RequireViewCustomers(_auth): RequireViewCustomers,
) -> Json<CustomerMetrics> {
    Json(DashboardService::customers())
}

/// Delivery partner availability
#[utoipa::path(
    get,
    path = "/api/metrics/delivery",
    responses(
        (status = 200, description = "Delivery partner metrics", body = DeliveryMetrics),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - requires view_delivery_partners", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Metrics"
)]
#[instrument(skip(_auth))]
pub async fn get_delivery_metrics(
    RequireViewDeliveryPartners(_auth): RequireViewDeliveryPartners,
) -> Json<DeliveryMetrics> {
    Json(DashboardService::delivery())
}
