//! Permissions and the role-permission map.
//!
//! Permissions are flat capability flags. Each [`Role`] maps to a fixed subset
//! of them; the table below is the single source of truth consulted by the
//! route guards and returned to the frontend so it can hide what the server
//! would reject.
//!
//! | Role | Permissions |
//! |------|-------------|
//! | super_admin | all |
//! | manager | view_orders, view_businesses, view_delivery_partners, manage_businesses, manage_orders |
//! | support | view_orders, view_customers, manage_notifications |
//! | kyc_associate | view_kyc_queue, verify_kyc |
//! | ca_finance | view_revenue, view_financial_reports |
//! | developer | view_system_logs, view_api_analytics, view_delivery_partners |
//!
//! # Example
//!
//! ```ignore
//! use kirazee_core::permissions::{Permission, has_permission};
//! use kirazee_core::Role;
//!
//! let role = Role::Developer;
//! assert!(has_permission(Some(&role), Permission::ViewSystemLogs));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::roles::Role;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewRevenue,
    ViewOrders,
    ViewBusinesses,
    ViewCustomers,
    ViewDeliveryPartners,
    ViewKycQueue,
    ViewSystemLogs,
    ViewApiAnalytics,
    ManageUsers,
    VerifyKyc,
    ManageBusinesses,
    ManageOrders,
    ViewFinancialReports,
    ManageNotifications,
}

impl Permission {
    pub const ALL: [Permission; 14] = [
        Permission::ViewRevenue,
        Permission::ViewOrders,
        Permission::ViewBusinesses,
        Permission::ViewCustomers,
        Permission::ViewDeliveryPartners,
        Permission::ViewKycQueue,
        Permission::ViewSystemLogs,
        Permission::ViewApiAnalytics,
        Permission::ManageUsers,
        Permission::VerifyKyc,
        Permission::ManageBusinesses,
        Permission::ManageOrders,
        Permission::ViewFinancialReports,
        Permission::ManageNotifications,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::ViewRevenue => "view_revenue",
            Permission::ViewOrders => "view_orders",
            Permission::ViewBusinesses => "view_businesses",
            Permission::ViewCustomers => "view_customers",
            Permission::ViewDeliveryPartners => "view_delivery_partners",
            Permission::ViewKycQueue => "view_kyc_queue",
            Permission::ViewSystemLogs => "view_system_logs",
            Permission::ViewApiAnalytics => "view_api_analytics",
            Permission::ManageUsers => "manage_users",
            Permission::VerifyKyc => "verify_kyc",
            Permission::ManageBusinesses => "manage_businesses",
            Permission::ManageOrders => "manage_orders",
            Permission::ViewFinancialReports => "view_financial_reports",
            Permission::ManageNotifications => "manage_notifications",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPermission(pub String);

impl std::error::Error for UnknownPermission {}

impl fmt::Display for UnknownPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown permission: {}", self.0)
    }
}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

const SUPER_ADMIN: &[Permission] = &Permission::ALL;

const MANAGER: &[Permission] = &[
    Permission::ViewOrders,
    Permission::ViewBusinesses,
    Permission::ViewDeliveryPartners,
    Permission::ManageBusinesses,
    Permission::ManageOrders,
];

const SUPPORT: &[Permission] = &[
    Permission::ViewOrders,
    Permission::ViewCustomers,
    Permission::ManageNotifications,
];

const KYC_ASSOCIATE: &[Permission] = &[Permission::ViewKycQueue, Permission::VerifyKyc];

const CA_FINANCE: &[Permission] = &[Permission::ViewRevenue, Permission::ViewFinancialReports];

const DEVELOPER: &[Permission] = &[
    Permission::ViewSystemLogs,
    Permission::ViewApiAnalytics,
    Permission::ViewDeliveryPartners,
];

/// The permissions granted to `role`. Total over [`Role`].
pub const fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN,
        Role::Manager => MANAGER,
        Role::Support => SUPPORT,
        Role::KycAssociate => KYC_ASSOCIATE,
        Role::CaFinance => CA_FINANCE,
        Role::Developer => DEVELOPER,
    }
}

/// Anything that carries a role: a stored user, token claims, or the role itself.
pub trait HasRole {
    fn role(&self) -> Role;
}

impl HasRole for Role {
    fn role(&self) -> Role {
        *self
    }
}

/// Returns true iff `user` is present and its role grants `permission`.
///
/// A missing user is never authorized. Callers decide whether that means
/// 401 (no user) or 403 (user without the permission).
pub fn has_permission<U>(user: Option<&U>, permission: Permission) -> bool
where
    U: HasRole + ?Sized,
{
    user.is_some_and(|u| u.role().has_permission(permission))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(role: Role) -> HashSet<Permission> {
        role.permissions().iter().copied().collect()
    }

    #[test]
    fn test_map_matches_membership_for_every_pair() {
        for role in Role::ALL {
            for permission in Permission::ALL {
                assert_eq!(
                    has_permission(Some(&role), permission),
                    role_permissions(role).contains(&permission),
                    "{role} / {permission}"
                );
            }
        }
    }

    #[test]
    fn test_missing_user_is_denied_everything() {
        for permission in Permission::ALL {
            assert!(!has_permission(None::<&Role>, permission));
        }
    }

    #[test]
    fn test_super_admin_is_superset_of_every_role() {
        let admin = set(Role::SuperAdmin);
        assert_eq!(admin.len(), 14);
        for role in Role::ALL {
            assert!(set(role).is_subset(&admin), "{role} exceeds super_admin");
        }
    }

    #[test]
    fn test_every_role_has_permissions() {
        for role in Role::ALL {
            assert!(!role.permissions().is_empty(), "{role} has no permissions");
        }
    }

    #[test]
    fn test_check_is_idempotent() {
        for _ in 0..3 {
            assert!(has_permission(Some(&Role::Manager), Permission::ManageOrders));
            assert!(!has_permission(Some(&Role::Manager), Permission::ManageUsers));
        }
    }

    #[test]
    fn test_kyc_associate_exact_set() {
        let expected: HashSet<Permission> = [Permission::ViewKycQueue, Permission::VerifyKyc]
            .into_iter()
            .collect();
        assert_eq!(set(Role::KycAssociate), expected);
        assert!(!has_permission(
            Some(&Role::KycAssociate),
            Permission::ViewRevenue
        ));
    }

    #[test]
    fn test_concrete_table() {
        use Permission::*;

        let cases: [(Role, &[Permission]); 5] = [
            (
                Role::Manager,
                &[
                    ViewOrders,
                    ViewBusinesses,
                    ViewDeliveryPartners,
                    ManageBusinesses,
                    ManageOrders,
                ],
            ),
            (
                Role::Support,
                &[ViewOrders, ViewCustomers, ManageNotifications],
            ),
            (Role::KycAssociate, &[ViewKycQueue, VerifyKyc]),
            (Role::CaFinance, &[ViewRevenue, ViewFinancialReports]),
            (
                Role::Developer,
                &[ViewSystemLogs, ViewApiAnalytics, ViewDeliveryPartners],
            ),
        ];

        for (role, expected) in cases {
            let expected: HashSet<Permission> = expected.iter().copied().collect();
            assert_eq!(set(role), expected, "{role}");
        }
    }

    #[test]
    fn test_manage_users_is_super_admin_only() {
        let holders: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|r| r.has_permission(Permission::ManageUsers))
            .collect();
        assert_eq!(holders, vec![Role::SuperAdmin]);
    }

    #[test]
    fn test_permission_parse_roundtrip() {
        for permission in Permission::ALL {
            assert_eq!(permission.as_str().parse::<Permission>().unwrap(), permission);
        }
        assert!("delete_everything".parse::<Permission>().is_err());
    }

    #[test]
    fn test_permission_serde() {
        let json = serde_json::to_string(&Permission::ViewDeliveryPartners).unwrap();
        assert_eq!(json, r#""view_delivery_partners""#);
    }
}
