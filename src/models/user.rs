//! User model and roles

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User roles gating ledger operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Regular,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Regular => "regular",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regular" => Ok(Role::Regular),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// A registered library member, immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: i32,
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    /// Plaintext credential compared verbatim by `Ledger::login`.
    /// Placeholder contract only; a real deployment needs a hashed,
    /// rate-limited credential store behind the same login shape.
    #[serde(skip_serializing)]
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    pub role: Role,
}

impl User {
    pub fn new(id: i32, username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("Regular".parse::<Role>(), Ok(Role::Regular));
        assert_eq!(Role::Admin.to_string(), "admin");
        assert!("librarian".parse::<Role>().is_err());
    }

    #[test]
    fn only_admin_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Regular.is_admin());
    }
}
