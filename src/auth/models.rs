//! Authentication Models
//! Mission: Define user accounts, roles and session token payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User account
///
/// The password is kept and serialized in plaintext so the admin listing stays
/// wire-compatible with existing clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

impl User {
    pub fn new(id: u64, username: &str, password: &str, role: UserRole) -> Self {
        Self {
            id,
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }
}

/// User roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin, // May list every account
    #[serde(rename = "common", alias = "comum")]
    Common, // Contract lookups only
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Common => "common",
        }
    }

    pub fn is_admin(&self) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Common => false,
        }
    }
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub user_id: u64,
    pub role: UserRole,
    pub iat: usize, // issued-at timestamp
    pub exp: usize, // expiration timestamp
}

/// Login request body
///
/// Only a JSON object is read. Anything else, absent fields, and non-string
/// fields all become empty strings and simply fail authentication.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_json(body: &Value) -> Self {
        let Some(fields) = body.as_object() else {
            return Self::default();
        };
        let field = |name: &str| {
            fields
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            username: field("username"),
            password: field("password"),
        }
    }
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub sessionid: String,
}

/// Admin user listing
#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub data: Vec<User>,
}
