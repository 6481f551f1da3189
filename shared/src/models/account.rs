//! Account Model

use serde::{Deserialize, Serialize};

/// Account role (two-tier RBAC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Account entity
///
/// `password` is a plaintext demo credential: this application compares
/// passwords by string equality and seeds well-known logins. Do not
/// treat it as a security boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique across accounts (case-sensitive, checked by linear scan)
    pub email: String,
    pub password: String,
    pub role: Role,
    pub verified: bool,
}

impl Account {
    /// Display name, e.g. "Admin User"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Self-service registration payload (always creates an unverified user)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRegister {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Create account payload (admin path: role and verified are settable)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub verified: bool,
}

/// Update account payload
///
/// Omitted password keeps the existing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub verified: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_form() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert!(role.is_admin());
    }

    #[test]
    fn test_account_camel_case() {
        let account = Account {
            id: 1,
            first_name: "Admin".into(),
            last_name: "User".into(),
            email: "admin@example.com".into(),
            password: "Password123!".into(),
            role: Role::Admin,
            verified: true,
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"firstName\":\"Admin\""));
        assert!(json.contains("\"lastName\":\"User\""));
        assert!(json.contains("\"role\":\"admin\""));

        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn test_full_name() {
        let account = Account {
            id: 1,
            first_name: "Regular".into(),
            last_name: "User".into(),
            email: "user@example.com".into(),
            password: "x".into(),
            role: Role::User,
            verified: true,
        };
        assert_eq!(account.full_name(), "Regular User");
    }
}
