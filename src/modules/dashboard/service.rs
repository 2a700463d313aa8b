//! Dashboard metrics.
//!
//! The marketplace services that own orders, businesses and payouts are not
//! wired up yet, so figures come from a deterministic sample data set. Every
//! function here is pure; the controllers apply permission checks and query
//! parameter parsing before calling in.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use kirazee_core::{Permission, Role};
use kirazee_models::dashboard::{
    BusinessMetrics, BusinessesSummary, CustomerMetrics, CustomersSummary, DailyRevenue,
    DeliveryMetrics, DeliveryPartnersSummary, KycPendingSummary, Order, OrderStatus,
    OrdersResponse, OrdersSummary, OverviewResponse, RevenueResponse, RevenueSummary, TimeRange,
};

const SAMPLE_ORDER_COUNT: u32 = 10;

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub struct DashboardService;

impl DashboardService {
    /// Overview sections visible to `role`. A section is present only when
    /// the role holds the permission that guards the matching detail endpoint.
    pub fn overview(role: Role) -> OverviewResponse {
        let can = |permission| role.has_permission(permission);

        OverviewResponse {
            revenue: can(Permission::ViewRevenue).then(|| RevenueSummary {
                total: 125_430.50,
                average_order_value: 45.20,
                trend: 12.5,
            }),
            orders: can(Permission::ViewOrders).then(|| OrdersSummary {
                total: 2775,
                pending: 450,
                completed: 2100,
                cancelled: 225,
            }),
            businesses: can(Permission::ViewBusinesses).then(|| BusinessesSummary {
                active: 156,
                pending_approval: 12,
            }),
            customers: can(Permission::ViewCustomers).then(|| CustomersSummary {
                unique: 8432,
                active: 1234,
            }),
            delivery_partners: can(Permission::ViewDeliveryPartners).then(|| {
                DeliveryPartnersSummary {
                    active: 89,
                    available: 67,
                }
            }),
            kyc_pending: can(Permission::ViewKycQueue).then(|| KycPendingSummary {
                businesses: 8,
                delivery_partners: 5,
            }),
        }
    }

    /// One data point per day for the days before today, oldest first.
    pub fn revenue(time_range: TimeRange) -> RevenueResponse {
        let today = Utc::now().date_naive();

        let data: Vec<DailyRevenue> = (1..=time_range.days())
            .rev()
            .map(|i| DailyRevenue {
                date: today - Duration::days(i64::from(i)),
                revenue: f64::from(18_000 + 500 * i),
                orders: 400 + 10 * i,
            })
            .collect();

        let total: f64 = data.iter().map(|d| d.revenue).sum();
        let orders: u32 = data.iter().map(|d| d.orders).sum();
        let average = if orders == 0 {
            0.0
        } else {
            round_cents(total / f64::from(orders))
        };

        RevenueResponse {
            data,
            total: round_cents(total),
            average,
            time_range,
        }
    }

    fn recent_orders() -> Vec<Order> {
        let now = Utc::now();
        (0..SAMPLE_ORDER_COUNT)
            .map(|i| Order {
                id: format!("ORD-{}", 1000 + i),
                customer: format!("Customer {i}"),
                items: vec!["Item A".to_string(), "Item B".to_string()],
                total: round_cents(45.20 + f64::from(i) * 5.0),
                status: match i % 3 {
                    0 => OrderStatus::Pending,
                    1 => OrderStatus::Completed,
                    _ => OrderStatus::Cancelled,
                },
                timestamp: now - Duration::hours(i64::from(i)),
            })
            .collect()
    }

    /// Recent orders, newest first. `total_count` counts matches before pagination.
    pub fn orders(status: Option<OrderStatus>, limit: i64, offset: i64) -> OrdersResponse {
        let matching: Vec<Order> = Self::recent_orders()
            .into_iter()
            .filter(|order| status.is_none_or(|s| order.status == s))
            .collect();

        let total_count = matching.len();
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(0);

        OrdersResponse {
            orders: matching.into_iter().skip(skip).take(take).collect(),
            total_count,
            limit,
            offset,
        }
    }

    pub fn businesses() -> BusinessMetrics {
        BusinessMetrics {
            active: 156,
            pending_approval: 12,
            by_category: BTreeMap::from([
                ("retail".to_string(), 65),
                ("food".to_string(), 58),
                ("clothing".to_string(), 33),
            ]),
        }
    }

    pub fn customers() -> CustomerMetrics {
        CustomerMetrics {
            unique: 8432,
            active: 1234,
            new_this_month: 342,
        }
    }

    pub fn delivery() -> DeliveryMetrics {
        DeliveryMetrics {
            active: 89,
            available: 67,
            on_delivery: 22,
        }
    }
}
