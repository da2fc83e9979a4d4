use serde_json::Value;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Builds an HTTP error from a non-success status and its raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: body_message(body).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message safe to show next to a form. Server-provided text wins; anything
    /// else collapses to `fallback` so transport details stay out of the UI.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Http { message, .. } if !message.is_empty() => message.clone(),
            Self::Validation(message) | Self::Timeout(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Extracts a human-readable message from an error body.
///
/// JSON bodies yield their `message` (or `error`) field; JSON without either
/// yields nothing. Plain text is trimmed and truncated.
#[must_use]
pub fn body_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<Value>(trimmed) {
        return ["message", "error"]
            .iter()
            .find_map(|key| json.get(key).and_then(Value::as_str))
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(truncate);
    }

    Some(truncate(trimmed))
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_message_prefers_message_field() {
        let body = r#"{"message":"Email not verified","error":"forbidden"}"#;
        assert_eq!(body_message(body), Some("Email not verified".to_string()));
    }

    #[test]
    fn body_message_falls_back_to_error_field() {
        assert_eq!(
            body_message(r#"{"error":"Invalid OTP"}"#),
            Some("Invalid OTP".to_string())
        );
    }

    #[test]
    fn body_message_ignores_json_without_text() {
        assert_eq!(body_message(r#"{"status":500}"#), None);
        assert_eq!(body_message(r#"{"message":"   "}"#), None);
    }

    #[test]
    fn body_message_uses_plain_text_and_truncates() {
        assert_eq!(body_message("  Bad Gateway \n"), Some("Bad Gateway".to_string()));
        let long = "x".repeat(500);
        assert_eq!(body_message(&long).map(|m| m.len()), Some(MAX_ERROR_CHARS));
        assert_eq!(body_message("   "), None);
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = AppError::from_response(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.user_message("Login failed."), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn user_message_uses_fallback_without_server_text() {
        let err = AppError::from_response(500, "");
        assert_eq!(err.user_message("Login failed."), "Login failed.");

        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Login failed."), "Login failed.");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn display_keeps_status() {
        let err = AppError::from_response(403, r#"{"message":"nope"}"#);
        assert_eq!(err.to_string(), "Request failed (403): nope");
    }
}
