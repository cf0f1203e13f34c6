//! Users and the persisted session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// A user as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Canonical identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone, if provided.
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether the email address has been verified.
    #[serde(default)]
    pub email_verified: bool,
    /// Whether the account is enabled.
    #[serde(default = "default_true")]
    pub active: bool,
    /// Account creation time, when the backend reports it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Persisted representation of the currently authenticated user.
///
/// Written to the local store on successful login and deleted on logout;
/// absence means "logged out". The token is attached as a bearer header on
/// subsequent API calls when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The authenticated user's identifier.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone, if provided.
    #[serde(default)]
    pub phone: Option<String>,
    /// Bearer token for authenticated API calls.
    #[serde(default)]
    pub token: Option<String>,
}

impl SessionRecord {
    /// Build a session record from a logged-in user and an optional token.
    #[must_use]
    pub fn for_user(user: &User, token: Option<String>) -> Self {
        Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            token,
        }
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_record_round_trips() {
        let record = SessionRecord {
            user_id: UserId::new("507f1f77bcf86cd799439011"),
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            phone: None,
            token: Some("tok-123".to_owned()),
        };

        let json = serde_json::to_string(&record).expect("serialize");
        let back: SessionRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
    }

    #[test]
    fn token_field_is_optional_on_the_wire() {
        let record: SessionRecord = serde_json::from_str(
            r#"{"user_id":"u-1","name":"Ana","email":"ana@example.com"}"#,
        )
        .expect("deserialize");
        assert_eq!(record.token, None);
        assert_eq!(record.phone, None);
    }
}
