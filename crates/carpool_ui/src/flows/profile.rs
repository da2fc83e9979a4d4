//! Profile completion: riders must add a phone number before the home view.

use crate::{error::AppError, paths, session::SessionStore, types::User};

pub const PROFILE_FAILED: &str = "Could not save your phone number. Please try again.";

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// Accepts digits with spaces, dashes, parentheses and one leading `+`, and
/// returns the trimmed input.
///
/// # Errors
/// Returns `AppError::Validation` for other characters or a digit count
/// outside 7..=15.
pub fn normalize_phone(input: &str) -> Result<String, AppError> {
    let phone = input.trim();
    let body = phone.strip_prefix('+').unwrap_or(phone);

    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'));
    let digits = body.chars().filter(char::is_ascii_digit).count();

    if !allowed || !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(AppError::Validation(
            "Enter a valid phone number.".to_string(),
        ));
    }

    Ok(phone.to_string())
}

/// Replaces the session user with the updated profile and returns the next
/// route: home, or login when the session vanished meanwhile.
pub fn complete_profile(store: &mut SessionStore, user: User) -> &'static str {
    if store.update_user(user) {
        paths::HOME
    } else {
        paths::LOGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Session;

    #[test]
    fn accepts_common_formats() {
        for phone in ["+1 (555) 010-0199", "5550100", " 020 7946 0958 ", "+919876543210"] {
            assert!(normalize_phone(phone).is_ok(), "{phone}");
        }
        assert_eq!(normalize_phone(" 5550100 "), Ok("5550100".to_string()));
    }

    #[test]
    fn rejects_letters_short_and_long_numbers() {
        for phone in ["", "555-CALL-NOW", "12345", "1234567890123456", "++15550100", "5550100+"] {
            assert!(normalize_phone(phone).is_err(), "{phone}");
        }
    }

    #[test]
    fn complete_profile_without_session_routes_to_login() {
        let mut store = SessionStore::new();
        let user = User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("5550100".to_string()),
            ..User::default()
        };
        assert_eq!(complete_profile(&mut store, user), paths::LOGIN);
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn complete_profile_updates_session_user() {
        let mut store = SessionStore::new();
        let user = User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("5550100".to_string()),
            ..User::default()
        };
        assert_eq!(complete_profile(&mut store, user.clone()), paths::LOGIN);

        store.login(Session {
            token: "t".to_string(),
            user: User {
                phone: None,
                ..user.clone()
            },
        });
        assert_eq!(complete_profile(&mut store, user), paths::HOME);
        assert!(store.user().is_some_and(User::has_phone));
    }
}
