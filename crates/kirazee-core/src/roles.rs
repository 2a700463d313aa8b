//! The six dashboard roles.
//!
//! Roles form a closed set compiled into the application. A user has exactly
//! one role; the permissions it grants are defined in
//! [`crate::permissions`].

use serde::{Deserialize, Serialize};
use sqlx::{Database, Decode, Encode, Sqlite, Type, sqlite::SqliteTypeInfo};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::permissions::{Permission, role_permissions};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Manager,
    Support,
    KycAssociate,
    CaFinance,
    Developer,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::SuperAdmin,
        Role::Manager,
        Role::Support,
        Role::KycAssociate,
        Role::CaFinance,
        Role::Developer,
    ];

    /// Wire and storage value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Manager => "manager",
            Role::Support => "support",
            Role::KycAssociate => "kyc_associate",
            Role::CaFinance => "ca_finance",
            Role::Developer => "developer",
        }
    }

    /// Human readable label for the UI.
    pub const fn display_name(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Manager => "Manager",
            Role::Support => "Support",
            Role::KycAssociate => "KYC Associate",
            Role::CaFinance => "CA Finance",
            Role::Developer => "Developer",
        }
    }

    pub const fn permissions(self) -> &'static [Permission] {
        role_permissions(self)
    }

    pub fn has_permission(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    /// Comma separated list of every role's wire value.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl std::error::Error for UnknownRole {}

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid role. Must be one of: {}", Role::valid_values())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl TryFrom<&str> for Role {
    type Error = UnknownRole;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// Stored as TEXT
impl Type<Sqlite> for Role {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for Role {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        let value: &'q str = self.as_str();
        <&'q str as Encode<'q, Sqlite>>::encode_by_ref(&value, buf)
    }
}

impl<'r> Decode<'r, Sqlite> for Role {
    fn decode(
        value: <Sqlite as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as Decode<'r, Sqlite>>::decode(value)?;
        Ok(raw.parse::<Role>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip_for_every_role() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn test_parse_unknown_role() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("admin".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid role. Must be one of: super_admin, manager, support, kyc_associate, ca_finance, developer"
        );
    }

    #[test]
    fn test_role_names_are_case_sensitive() {
        assert!("Super_Admin".parse::<Role>().is_err());
        assert!("SUPPORT".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::KycAssociate).unwrap();
        assert_eq!(json, r#""kyc_associate""#);

        let role: Role = serde_json::from_str(r#""ca_finance""#).unwrap();
        assert_eq!(role, Role::CaFinance);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Role::SuperAdmin.display_name(), "Super Admin");
        assert_eq!(Role::KycAssociate.display_name(), "KYC Associate");
        assert_eq!(Role::CaFinance.display_name(), "CA Finance");
    }
}
