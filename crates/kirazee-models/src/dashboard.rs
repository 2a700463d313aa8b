//! Dashboard metric models.
//!
//! Response shapes for the `/api/metrics/*` endpoints and the query
//! parameter choices they accept.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use kirazee_core::params::ParamChoice;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_ORDERS_LIMIT: i64 = 50;
pub const MAX_PAGE_LIMIT: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RevenueSummary {
    pub total: f64,
    pub average_order_value: f64,
    /// Percentage change against the previous period
    pub trend: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrdersSummary {
    pub total: u32,
    pub pending: u32,
    pub completed: u32,
    pub cancelled: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BusinessesSummary {
    pub active: u32,
    pub pending_approval: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomersSummary {
    pub unique: u32,
    pub active: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryPartnersSummary {
    pub active: u32,
    pub available: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KycPendingSummary {
    pub businesses: u32,
    pub delivery_partners: u32,
}

/// Overview metrics. Sections the caller may not view are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverviewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<RevenueSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<OrdersSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub businesses: Option<BusinessesSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customers: Option<CustomersSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_partners: Option<DeliveryPartnersSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_pending: Option<KycPendingSummary>,
}

/// Revenue reporting window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    /// Number of daily data points in the window.
    pub const fn days(self) -> u32 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Year => 365,
        }
    }
}

impl ParamChoice for TimeRange {
    const ALL: &'static [Self] = &[
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Year,
    ];

    fn as_str(self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RevenueResponse {
    pub data: Vec<DailyRevenue>,
    pub total: f64,
    /// Average order value over the window
    pub average: f64,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl ParamChoice for OrderStatus {
    const ALL: &'static [Self] = &[
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub items: Vec<String>,
    pub total: f64,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
    /// Matching orders before pagination
    pub total_count: usize,
    pub limit: i64,
    pub offset: i64,
}

/// Raw query string for `/api/metrics/revenue`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RevenueQuery {
    /// day, week, month or year (default week)
    pub time_range: Option<String>,
}

/// Raw query string for `/api/metrics/orders`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrdersQuery {
    /// pending, completed or cancelled
    pub status: Option<String>,
    /// 1 to 1000 (default 50)
    pub limit: Option<String>,
    /// 0 or more (default 0)
    pub offset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BusinessMetrics {
    pub active: u32,
    pub pending_approval: u32,
    pub by_category: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerMetrics {
    pub unique: u32,
    pub active: u32,
    pub new_this_month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryMetrics {
    pub active: u32,
    pub available: u32,
    pub on_delivery: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kirazee_core::params::parse_choice;

    #[test]
    fn test_time_range_defaults_to_week() {
        assert_eq!(TimeRange::default(), TimeRange::Week);
        assert_eq!(TimeRange::default().days(), 7);
    }

    #[test]
    fn test_time_range_parsing() {
        assert_eq!(
            parse_choice::<TimeRange>(Some("year"), "time_range").unwrap(),
            Some(TimeRange::Year)
        );
        let err = parse_choice::<TimeRange>(Some("decade"), "time_range").unwrap_err();
        assert_eq!(
            err.error.to_string(),
            "Invalid time_range. Must be one of: day, week, month, year"
        );
    }

    #[test]
    fn test_order_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            r#""cancelled""#
        );
    }

    #[test]
    fn test_overview_omits_missing_sections() {
        let overview = OverviewResponse {
            kyc_pending: Some(KycPendingSummary {
                businesses: 8,
                delivery_partners: 5,
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&overview).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["kyc_pending".to_string()]);
    }
}
