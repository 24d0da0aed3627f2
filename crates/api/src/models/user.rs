//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use elanicia_core::{Email, RecordId};

/// A storefront account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned id; `None` until the record has been inserted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Display name.
    pub name: String,
    /// Normalized email, unique across users (advisory check at signup).
    pub email: Email,
    /// Opaque password hash. Must never reach a client; handlers convert
    /// to [`UserPublic`] or [`UserSummary`] before responding.
    pub password: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Whether the account is active.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

const fn default_is_active() -> bool {
    true
}

impl User {
    /// The identity summary echoed by signup.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// User shape safe to return to clients - everything but the hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserPublic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            is_active: user.is_active,
        }
    }
}

/// Minimal identity summary.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: Email,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_public_shape_has_no_password_field() {
        let user = User {
            id: Some(RecordId::Seq(1)),
            name: "Amira".to_owned(),
            email: Email::parse("amira@example.com").unwrap(),
            password: "hash".to_owned(),
            created_at: Utc::now(),
            is_active: true,
        };

        let value = serde_json::to_value(UserPublic::from(user)).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("Amira"));
    }

    #[test]
    fn test_is_active_defaults_on_deserialize() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Amira",
                "email": "amira@example.com",
                "password": "hash",
                "created_at": "2026-01-15T08:30:00Z"
            }"#,
        )
        .unwrap();

        assert!(user.is_active);
    }
}
