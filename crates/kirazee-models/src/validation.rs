//! Custom `validator` rules shared by the request DTOs.

use std::borrow::Cow;

use kirazee_core::Role;
use validator::ValidationError;

use crate::value_types::{Username, validate_password};

fn error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    Username::validate(username).map_err(|e| error("username", e.to_string()))
}

pub fn validate_password_field(password: &str) -> Result<(), ValidationError> {
    validate_password(password).map_err(|e| error("password", e.to_string()))
}

pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<Role>()
        .map(|_| ())
        .map_err(|e| error("role", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ValidationError) -> String {
        err.message.unwrap().to_string()
    }

    #[test]
    fn test_validate_username_messages() {
        assert!(validate_username("support1").is_ok());
        assert_eq!(
            message(validate_username("ab").unwrap_err()),
            "Username must be at least 3 characters"
        );
    }

    #[test]
    fn test_validate_password_messages() {
        assert!(validate_password_field("support123").is_ok());
        assert_eq!(
            message(validate_password_field("1234").unwrap_err()),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_validate_role() {
        assert!(validate_role("ca_finance").is_ok());
        assert_eq!(
            message(validate_role("admin").unwrap_err()),
            "Invalid role. Must be one of: super_admin, manager, support, kyc_associate, ca_finance, developer"
        );
    }
}
