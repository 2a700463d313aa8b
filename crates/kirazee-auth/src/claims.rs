//! JWT claim structure for access tokens.

use kirazee_core::{HasRole, Permission, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// JWT claims for access tokens.
///
/// These claims are embedded in access tokens and provide all necessary
/// information for authentication and authorization without database lookups.
/// A token whose `role` is not one of the six known roles fails to decode and
/// is treated as invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// Username at the time the token was issued
    pub username: String,
    /// The user's role
    pub role: Role,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    pub fn permissions(&self) -> &'static [Permission] {
        self.role.permissions()
    }
}

impl HasRole for Claims {
    fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kirazee_core::has_permission;

    fn claims(role: Role) -> Claims {
        Claims {
            sub: Uuid::new_v4().to_string(),
            username: "finance1".to_string(),
            role,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "user-id-123".to_string(),
            username: "kyc1".to_string(),
            role: Role::KycAssociate,
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"user-id-123""#));
        assert!(serialized.contains(r#""username":"kyc1""#));
        assert!(serialized.contains(r#""role":"kyc_associate""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"user-id-456","username":"dev1","role":"developer","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "user-id-456");
        assert_eq!(claims.username, "dev1");
        assert_eq!(claims.role, Role::Developer);
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_claims_with_unknown_role_fail() {
        let json = r#"{"sub":"x","username":"root","role":"root","exp":9999999999,"iat":1}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_claims_permissions_follow_role() {
        let claims = claims(Role::CaFinance);
        assert_eq!(
            claims.permissions(),
            &[Permission::ViewRevenue, Permission::ViewFinancialReports]
        );
        assert!(has_permission(Some(&claims), Permission::ViewRevenue));
        assert!(!has_permission(Some(&claims), Permission::ViewOrders));
    }

    #[test]
    fn test_user_id_parsing() {
        let claims = claims(Role::Support);
        assert!(claims.user_id().is_some());

        let bad = Claims {
            sub: "not-a-uuid".to_string(),
            ..claims
        };
        assert!(bad.user_id().is_none());
    }
}
