use chrono::Utc;
use kirazee::kirazee_auth::Claims;
use kirazee::kirazee_core::{Permission, Role, has_permission};
use kirazee::kirazee_models::users::User;
use kirazee::kirazee_models::value_types::Username;
use kirazee::kirazee_models::UserId;
use kirazee::middleware::auth::AuthUser;

fn user_with_role(role: Role) -> User {
    User {
        id: UserId::new(),
        username: Username::new("someone").unwrap(),
        role,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        last_login: None,
    }
}

#[test]
fn test_no_user_has_no_permissions() {
    for permission in Permission::ALL {
        assert!(!has_permission::<User>(None, permission));
    }
}

#[test]
fn test_super_admin_has_every_permission() {
    let admin = user_with_role(Role::SuperAdmin);
    for permission in Permission::ALL {
        assert!(has_permission(Some(&admin), permission), "{}", permission);
    }
}

#[test]
fn test_manage_users_is_super_admin_only() {
    for role in Role::ALL {
        let user = user_with_role(role);
        assert_eq!(
            has_permission(Some(&user), Permission::ManageUsers),
            role == Role::SuperAdmin,
            "{}",
            role
        );
    }
}

#[test]
fn test_role_grants() {
    let cases = [
        (Role::Manager, Permission::ViewBusinesses, true),
        (Role::Manager, Permission::ViewRevenue, false),
        (Role::Support, Permission::ManageNotifications, true),
        (Role::Support, Permission::ViewKycQueue, false),
        (Role::KycAssociate, Permission::VerifyKyc, true),
        (Role::KycAssociate, Permission::ViewOrders, false),
        (Role::CaFinance, Permission::ViewFinancialReports, true),
        (Role::CaFinance, Permission::ViewCustomers, false),
        (Role::Developer, Permission::ViewDeliveryPartners, true),
        (Role::Developer, Permission::ManageOrders, false),
    ];

    for (role, permission, expected) in cases {
        let user = user_with_role(role);
        assert_eq!(
            has_permission(Some(&user), permission),
            expected,
            "{} / {}",
            role,
            permission
        );
    }
}

#[test]
fn test_authenticated_caller_checks_token_role() {
    let caller = AuthUser(Claims {
        sub: UserId::new().to_string(),
        username: "dev1".to_string(),
        role: Role::Developer,
        exp: 0,
        iat: 0,
    });

    assert!(caller.has_permission(Permission::ViewSystemLogs));
    assert!(!caller.has_permission(Permission::ManageUsers));
}
