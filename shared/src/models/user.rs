//! User Model and Roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authorization capability class of a user.
///
/// Stored as lowercase TEXT; the closed enum replaces ad-hoc role strings
/// so a typo can never mint an unreachable capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            "customer" => Ok(Role::Customer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error for role strings outside the closed set
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// User entity
///
/// `restaurant_id` is None for platform-level accounts (e.g. admins that
/// are not bound to a single tenant).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub restaurant_id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: i64,
}

/// Self-service registration payload (always yields a customer account)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Confirmation field; must match `password`
    pub password2: String,
    /// Restaurant the customer signs up with
    pub restaurant_id: Option<i64>,
}

/// Own-profile update payload (email and role are read-only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
}

/// Admin-side user creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAdminCreate {
    pub restaurant_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Admin-side user update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAdminUpdate {
    pub restaurant_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}
