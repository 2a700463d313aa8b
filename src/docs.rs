use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use kirazee_core::{Permission, Role};
use kirazee_models::auth::{
    AuthUserInfo, ErrorResponse, LoginRequest, LoginResponse, MessageResponse, VerifyResponse,
};
use kirazee_models::dashboard::{
    BusinessMetrics, BusinessesSummary, CustomerMetrics, CustomersSummary, DailyRevenue,
    DeliveryMetrics, DeliveryPartnersSummary, KycPendingSummary, Order, OrderStatus,
    OrdersResponse, OrdersSummary, OverviewResponse, RevenueResponse, RevenueSummary, TimeRange,
};
use kirazee_models::ids::UserId;
use kirazee_models::kyc::{
    KycDecision, KycDocument, KycSubjectType, KycVerifyRequest, KycVerifyResponse,
    PendingVerificationsResponse, Verification,
};
use kirazee_models::roles::{RoleInfo, RolesResponse};
use kirazee_models::system::{ApiAnalytics, LogEntry, LogLevel, LogsResponse};
use kirazee_models::users::{
    CreateUserDto, UpdateUserDto, UserMutationResponse, UserSummary, UsersListResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::auth::controller::verify_token,
        crate::modules::dashboard::controller::get_overview,
        crate::modules::dashboard::controller::get_revenue,
        crate::modules::dashboard::controller::get_orders,
        crate::modules::dashboard::controller::get_business_metrics,
        crate::modules::dashboard::controller::get_customer_metrics,
        crate::modules::dashboard::controller::get_delivery_metrics,
        crate::modules::kyc::controller::get_pending_verifications,
        crate::modules::kyc::controller::verify_submission,
        crate::modules::system::controller::get_logs,
        crate::modules::system::controller::get_api_analytics,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::roles::controller::get_roles,
    ),
    components(
        schemas(
            Role,
            Permission,
            UserId,
            LoginRequest,
            LoginResponse,
            AuthUserInfo,
            VerifyResponse,
            MessageResponse,
            ErrorResponse,
            OverviewResponse,
            RevenueSummary,
            OrdersSummary,
            BusinessesSummary,
            CustomersSummary,
            DeliveryPartnersSummary,
            KycPendingSummary,
            TimeRange,
            DailyRevenue,
            RevenueResponse,
            OrderStatus,
            Order,
            OrdersResponse,
            BusinessMetrics,
            CustomerMetrics,
            DeliveryMetrics,
            KycSubjectType,
            KycDocument,
            Verification,
            PendingVerificationsResponse,
            KycVerifyRequest,
            KycDecision,
            KycVerifyResponse,
            LogLevel,
            LogEntry,
            LogsResponse,
            ApiAnalytics,
            CreateUserDto,
            UpdateUserDto,
            UserSummary,
            UsersListResponse,
            UserMutationResponse,
            RoleInfo,
            RolesResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, logout and token verification"),
        (name = "Metrics", description = "Revenue, order, business, customer and delivery metrics"),
        (name = "KYC", description = "Business and delivery partner verification queue"),
        (name = "System", description = "System logs and API analytics"),
        (name = "Users", description = "Dashboard user management"),
        (name = "Roles", description = "The role-permission map")
    ),
    info(
        title = "Kirazee Dashboard API",
        version = "0.1.0",
        description = "Role-based admin dashboard API for the Kirazee marketplace. Every endpoint except login and health requires a bearer JWT; access is decided by the permissions of the caller's role.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
