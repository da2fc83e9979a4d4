//! Request and response payloads for the carpool API. Field names are camelCase
//! on the wire. Tokens and passwords are redacted from `Debug` output so these
//! types can sit inside logged state without leaking secrets.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

impl User {
    /// A profile without a phone number must be completed before riding.
    #[must_use]
    pub fn has_phone(&self) -> bool {
        self.phone
            .as_deref()
            .is_some_and(|phone| !phone.trim().is_empty())
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Authentication token paired with the signed-in user's profile.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl AuthResponse {
    #[must_use]
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            user: self.user,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GoogleLoginRequest {
    pub credential: String,
}

#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("phone", &self.phone)
            .finish()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(alias = "id")]
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub email: String,
}

/// Verification may or may not sign the user in, depending on the backend.
#[derive(Clone, Default, Deserialize)]
pub struct VerifyEmailResponse {
    pub token: Option<String>,
    pub user: Option<User>,
    pub message: Option<String>,
}

impl VerifyEmailResponse {
    /// Returns a session only when both halves are present.
    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        match (self.token, self.user) {
            (Some(token), Some(user)) if !token.trim().is_empty() => Some(Session { token, user }),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateProfileRequest {
    pub phone: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_rides: u32,
    pub upcoming_rides: u32,
    pub completed_rides: u32,
    pub rides_offered: u32,
    pub money_saved: f64,
    pub co2_saved_kg: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_activity: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(phone: Option<&str>) -> User {
        User {
            id: "u1".to_string(),
            name: Some("Ada".to_string()),
            email: "ada@example.com".to_string(),
            phone: phone.map(str::to_string),
            role: None,
            is_verified: true,
        }
    }

    #[test]
    fn user_accepts_mongo_id_and_missing_fields() -> Result<(), serde_json::Error> {
        let user: User = serde_json::from_value(json!({
            "_id": "abc123",
            "email": "rider@example.com"
        }))?;
        assert_eq!(user.id, "abc123");
        assert_eq!(user.phone, None);
        assert!(!user.is_verified);
        assert_eq!(user.display_name(), "rider@example.com");
        Ok(())
    }

    #[test]
    fn user_has_phone_ignores_blank() {
        assert!(user(Some("+1 555 0100")).has_phone());
        assert!(!user(Some("  ")).has_phone());
        assert!(!user(None).has_phone());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let session = Session {
            token: "jwt-secret".to_string(),
            user: user(None),
        };
        assert!(!format!("{session:?}").contains("jwt-secret"));

        let credentials = Credentials::new("ada@example.com", "hunter22");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("ada@example.com"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn verify_request_omits_missing_user_id() -> Result<(), serde_json::Error> {
        let request = VerifyEmailRequest {
            user_id: None,
            email: "ada@example.com".to_string(),
            otp: "123456".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"email": "ada@example.com", "otp": "123456"})
        );

        let request = ResendOtpRequest {
            user_id: Some("u1".to_string()),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"userId": "u1", "email": "ada@example.com"})
        );
        Ok(())
    }

    #[test]
    fn verify_response_needs_token_and_user_for_session() -> Result<(), serde_json::Error> {
        let full: VerifyEmailResponse = serde_json::from_value(json!({
            "token": "t",
            "user": {"id": "u1", "email": "ada@example.com"}
        }))?;
        assert!(full.into_session().is_some());

        let message_only: VerifyEmailResponse =
            serde_json::from_value(json!({"message": "Email verified"}))?;
        assert!(message_only.into_session().is_none());

        let token_only: VerifyEmailResponse = serde_json::from_value(json!({"token": "t"}))?;
        assert!(token_only.into_session().is_none());
        Ok(())
    }

    #[test]
    fn dashboard_defaults_missing_fields() -> Result<(), serde_json::Error> {
        let dashboard: DashboardResponse = serde_json::from_value(json!({
            "stats": {"totalRides": 12, "moneySaved": 48.5},
            "recentActivity": [
                {"_id": "a1", "type": "ride_completed", "description": "Ride to Airport"}
            ]
        }))?;
        assert_eq!(dashboard.stats.total_rides, 12);
        assert_eq!(dashboard.stats.upcoming_rides, 0);
        assert_eq!(dashboard.recent_activity.len(), 1);
        assert_eq!(dashboard.recent_activity[0].kind, "ride_completed");
        assert_eq!(dashboard.recent_activity[0].created_at, None);

        let empty: DashboardResponse = serde_json::from_value(json!({}))?;
        assert_eq!(empty, DashboardResponse::default());
        Ok(())
    }

    #[test]
    fn register_response_accepts_id_alias() -> Result<(), serde_json::Error> {
        let response: RegisterResponse =
            serde_json::from_value(json!({"id": "u9", "email": "new@example.com"}))?;
        assert_eq!(response.user_id.as_deref(), Some("u9"));
        Ok(())
    }
}
