//! Role map response models.

use kirazee_core::{Permission, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One role and the permissions it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleInfo {
    pub role: Role,
    /// Human-readable label, e.g. "KYC Associate"
    pub name: String,
    pub permissions: Vec<Permission>,
}

impl From<Role> for RoleInfo {
    fn from(role: Role) -> Self {
        Self {
            role,
            name: role.display_name().to_string(),
            permissions: role.permissions().to_vec(),
        }
    }
}

/// The complete role-permission map.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RolesResponse {
    pub roles: Vec<RoleInfo>,
    pub permissions: Vec<Permission>,
}

impl RolesResponse {
    pub fn current() -> Self {
        Self {
            roles: Role::ALL.into_iter().map(RoleInfo::from).collect(),
            permissions: Permission::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_response_covers_every_role() {
        let response = RolesResponse::current();
        assert_eq!(response.roles.len(), 6);
        assert_eq!(response.permissions.len(), 14);
        assert_eq!(response.roles[0].role, Role::SuperAdmin);
        assert_eq!(response.roles[0].permissions.len(), 14);
    }

    #[test]
    fn test_role_info_serialization() {
        let json = serde_json::to_value(RoleInfo::from(Role::CaFinance)).unwrap();
        assert_eq!(json["role"], "ca_finance");
        assert_eq!(
            json["permissions"],
            serde_json::json!(["view_revenue", "view_financial_reports"])
        );
    }
}
