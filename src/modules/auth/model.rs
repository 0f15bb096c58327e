//! Identity shapes consumed from the backend auth provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of marketplace roles. Every role-scoped section admits exactly
/// one of these; anything else the backend might ever return is a
/// deserialization error, not a silent pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Tutor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Tutor => "TUTOR",
            Self::Admin => "ADMIN",
        }
    }
}

/// The caller's identity as reported by `GET /api/auth/me`. Fetched fresh
/// per guarded navigation and never cached — the staleness window is one
/// navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_screaming_case() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), r#""STUDENT""#);
        assert_eq!(serde_json::to_string(&Role::Tutor).unwrap(), r#""TUTOR""#);
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""ADMIN""#);

        let role: Role = serde_json::from_str(r#""TUTOR""#).unwrap();
        assert_eq!(role, Role::Tutor);
    }

    #[test]
    fn unknown_role_fails_to_deserialize() {
        assert!(serde_json::from_str::<Role>(r#""SUPERADMIN""#).is_err());
    }

    #[test]
    fn identity_deserializes_camel_case() {
        let json = r#"{
            "id": "usr_1",
            "name": "Ada",
            "email": "ada@example.com",
            "role": "STUDENT",
            "isBanned": false,
            "isActive": true,
            "createdAt": "2026-01-15T09:30:00Z"
        }"#;
        let identity: UserIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.role, Role::Student);
        assert!(identity.is_active);
        assert!(!identity.is_banned);
    }
}
