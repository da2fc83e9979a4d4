//! Session state shared by every page that needs identity. One store exists
//! per tab (web) or per process (terminal); pages receive it explicitly and
//! change it only through `login`/`logout`.

use crate::types::{Session, User};
use tracing::debug;

/// Hand-off from login or registration to the verification page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingVerification {
    pub user_id: Option<String>,
    pub email: String,
}

impl PendingVerification {
    #[must_use]
    pub fn new(user_id: Option<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.filter(|id| !id.trim().is_empty()),
            email: email.into().trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    session: Option<Session>,
    pending: Option<PendingVerification>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fresh session. Any pending verification is finished by now.
    pub fn login(&mut self, session: Session) {
        debug!(user_id = %session.user.id, "session started");
        self.session = Some(session);
        self.pending = None;
    }

    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            debug!("session cleared");
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Replaces the profile of the signed-in user, keeping the token.
    /// Returns false when nobody is signed in.
    pub fn update_user(&mut self, user: User) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.user = user;
                true
            }
            None => false,
        }
    }

    pub fn set_pending_verification(&mut self, pending: PendingVerification) {
        self.pending = Some(pending);
    }

    #[must_use]
    pub fn pending_verification(&self) -> Option<&PendingVerification> {
        self.pending.as_ref()
    }

    pub fn clear_pending_verification(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "token-1".to_string(),
            user: User {
                id: "u1".to_string(),
                email: "ada@example.com".to_string(),
                ..User::default()
            },
        }
    }

    #[test]
    fn login_and_logout_lifecycle() {
        let mut store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);

        store.login(session());
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("token-1"));
        assert_eq!(store.user().map(|u| u.id.as_str()), Some("u1"));

        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(store.session(), None);
    }

    #[test]
    fn login_finishes_pending_verification() {
        let mut store = SessionStore::new();
        store.set_pending_verification(PendingVerification::new(None, "ada@example.com"));
        assert!(store.pending_verification().is_some());

        store.login(session());
        assert_eq!(store.pending_verification(), None);
    }

    #[test]
    fn update_user_requires_session() {
        let mut store = SessionStore::new();
        let user = User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("+15550100".to_string()),
            ..User::default()
        };
        assert!(!store.update_user(user.clone()));

        store.login(session());
        assert!(store.update_user(user));
        assert_eq!(store.token(), Some("token-1"));
        assert!(store.user().is_some_and(User::has_phone));
    }

    #[test]
    fn pending_verification_normalizes_input() {
        let pending = PendingVerification::new(Some("  ".to_string()), "  ada@example.com ");
        assert_eq!(pending.user_id, None);
        assert_eq!(pending.email, "ada@example.com");
    }
}
