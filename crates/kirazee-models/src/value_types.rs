//! Strongly-typed value types with validation for domain primitives.
//!
//! # Example
//!
//! ```ignore
//! use kirazee_models::value_types::Username;
//!
//! let username: Username = "manager_1".parse().unwrap();
//! assert!("-bad".parse::<Username>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use sqlx::{Database, Decode, Encode, Sqlite, Type, sqlite::SqliteTypeInfo};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    InvalidUsername(&'static str),
    InvalidPassword(&'static str),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUsername(msg) | Self::InvalidPassword(msg) => f.write_str(msg),
        }
    }
}

// ============================================================================
// Username
// ============================================================================

/// A validated username.
///
/// 3 to 50 ASCII letters or digits, optionally separated by single
/// underscores or hyphens. Must start and end with a letter or digit.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, example = "manager1")]
pub struct Username(String);

impl Username {
    /// Create a new Username, trimming surrounding whitespace and validating it.
    pub fn new(username: impl AsRef<str>) -> Result<Self, ValueTypeError> {
        let username = username.as_ref().trim();
        Self::validate(username)?;
        Ok(Self(username.to_string()))
    }

    /// Create a Username without validation.
    ///
    /// Intended for values loaded from the database, which were validated on
    /// the way in.
    #[inline]
    pub fn new_unchecked(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate a raw username.
    pub fn validate(username: &str) -> Result<(), ValueTypeError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(ValueTypeError::InvalidUsername("Username is required"));
        }

        let len = username.chars().count();
        if len < USERNAME_MIN_LENGTH {
            return Err(ValueTypeError::InvalidUsername(
                "Username must be at least 3 characters",
            ));
        }
        if len > USERNAME_MAX_LENGTH {
            return Err(ValueTypeError::InvalidUsername(
                "Username must not exceed 50 characters",
            ));
        }

        if !matches_username_pattern(username) {
            return Err(ValueTypeError::InvalidUsername(
                "Username can only contain letters, numbers, underscores, and hyphens",
            ));
        }

        Ok(())
    }
}

fn matches_username_pattern(username: &str) -> bool {
    // Treat the start as a separator so a leading `_` or `-` is rejected.
    let mut after_separator = true;

    for c in username.chars() {
        if c.is_ascii_alphanumeric() {
            after_separator = false;
        } else if c == '_' || c == '-' {
            if after_separator {
                return false;
            }
            after_separator = true;
        } else {
            return false;
        }
    }

    !after_separator
}

/// Validate a raw password against the length rules.
pub fn validate_password(password: &str) -> Result<(), ValueTypeError> {
    if password.is_empty() {
        return Err(ValueTypeError::InvalidPassword("Password is required"));
    }

    let len = password.chars().count();
    if len < PASSWORD_MIN_LENGTH {
        return Err(ValueTypeError::InvalidPassword(
            "Password must be at least 8 characters",
        ));
    }
    if len > PASSWORD_MAX_LENGTH {
        return Err(ValueTypeError::InvalidPassword(
            "Password must not exceed 128 characters",
        ));
    }

    Ok(())
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username({})", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Username {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Username {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Username {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(username: Username) -> String {
        username.0
    }
}

impl PartialEq<str> for Username {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Username {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Type<Sqlite> for Username {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for Username {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as Encode<'q, Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, Sqlite> for Username {
    fn decode(
        value: <Sqlite as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        <String as Decode<'r, Sqlite>>::decode(value).map(Self::new_unchecked)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in ["admin1", "kyc_associate", "ca-finance", "a1b", "dev_team-2"] {
            assert!(Username::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_username_is_trimmed() {
        assert_eq!(Username::new("  manager1 ").unwrap(), "manager1");
    }

    #[test]
    fn test_username_required() {
        assert_eq!(
            Username::new("   ").unwrap_err().to_string(),
            "Username is required"
        );
    }

    #[test]
    fn test_username_length() {
        assert_eq!(
            Username::new("ab").unwrap_err().to_string(),
            "Username must be at least 3 characters"
        );
        assert_eq!(
            Username::new("a".repeat(51)).unwrap_err().to_string(),
            "Username must not exceed 50 characters"
        );
        assert!(Username::new("a".repeat(50)).is_ok());
    }

    #[test]
    fn test_username_pattern() {
        let msg = "Username can only contain letters, numbers, underscores, and hyphens";
        for name in ["_admin", "admin_", "ad__min", "ad-_min", "ad min", "admin!", "adm.in"] {
            assert_eq!(
                Username::new(name).unwrap_err().to_string(),
                msg,
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("kyc12345").is_ok());
        assert_eq!(
            validate_password("").unwrap_err().to_string(),
            "Password is required"
        );
        assert_eq!(
            validate_password("short").unwrap_err().to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            validate_password(&"p".repeat(129)).unwrap_err().to_string(),
            "Password must not exceed 128 characters"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Username>(r#""support1""#).is_ok());
        assert!(serde_json::from_str::<Username>(r#""x""#).is_err());
    }
}
