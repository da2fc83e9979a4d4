//! Login request/response handling: input checks before the request, the
//! route taken after success, and the split between an unverified account and
//! every other failure.

use crate::{
    error::AppError,
    paths,
    session::{PendingVerification, SessionStore},
    types::{AuthResponse, Credentials, User},
};
use tracing::debug;

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials and try again.";
pub const GOOGLE_LOGIN_FAILED: &str = "Google sign-in failed. Please try again.";
const UNVERIFIED_FALLBACK: &str = "Your email address is not verified yet.";
const CREDENTIALS_REQUIRED: &str = "Email and password are required.";

const FORBIDDEN: u16 = 403;
const UNVERIFIED_MARKER: &str = "not verified";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    /// The account exists but its email is unverified; the page offers a
    /// shortcut to the verification page for `email`.
    Unverified { message: String, email: String },
}

impl LoginState {
    /// Maps a failed login for `email` to the state the page should show.
    #[must_use]
    pub fn from_failure(err: &AppError, email: &str, fallback: &str) -> Self {
        if is_unverified(err) {
            debug!("login rejected for unverified email");
            Self::Unverified {
                message: err.user_message(UNVERIFIED_FALLBACK),
                email: email.trim().to_string(),
            }
        } else {
            Self::Failed(err.user_message(fallback))
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) | Self::Unverified { message, .. } => Some(message.as_str()),
            Self::Idle | Self::Submitting => None,
        }
    }

    /// Verification hand-off offered by the unverified state.
    #[must_use]
    pub fn verification_handoff(&self) -> Option<PendingVerification> {
        match self {
            Self::Unverified { email, .. } => Some(PendingVerification::new(None, email.clone())),
            _ => None,
        }
    }
}

/// True for a 403 whose message says the email is not verified, in any case.
#[must_use]
pub fn is_unverified(err: &AppError) -> bool {
    match err {
        AppError::Http { status, message } => {
            *status == FORBIDDEN && message.to_lowercase().contains(UNVERIFIED_MARKER)
        }
        _ => false,
    }
}

/// Trims the email and rejects empty fields before any request is made.
///
/// # Errors
/// Returns `AppError::Validation` when the email or password is blank.
pub fn validate_credentials(credentials: &Credentials) -> Result<Credentials, AppError> {
    let email = credentials.email.trim();
    if email.is_empty() || credentials.password.trim().is_empty() {
        return Err(AppError::Validation(CREDENTIALS_REQUIRED.to_string()));
    }
    Ok(Credentials::new(email, credentials.password.clone()))
}

/// Route after a successful login: profile completion when the phone number
/// is missing, home otherwise.
#[must_use]
pub fn success_route(user: &User) -> &'static str {
    if user.has_phone() {
        paths::HOME
    } else {
        paths::COMPLETE_PROFILE
    }
}

/// Stores the session from a successful login and returns the next route.
pub fn complete_login(store: &mut SessionStore, response: AuthResponse) -> &'static str {
    let route = success_route(&response.user);
    store.login(response.into_session());
    debug!(route, "login complete");
    route
}
