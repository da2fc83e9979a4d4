//! Account registration: local checks for early feedback, then the hand-off
//! to email verification.

use crate::{
    error::AppError,
    session::PendingVerification,
    types::{RegisterRequest, RegisterResponse},
};
use std::fmt;

pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .field("phone", &self.phone)
            .finish()
    }
}

impl RegisterForm {
    /// Checks the form and builds the request with trimmed fields.
    ///
    /// # Errors
    /// Returns `AppError::Validation` describing the first problem found.
    pub fn validate(&self) -> Result<RegisterRequest, AppError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();

        if name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(invalid("Name, email and password are required."));
        }
        if !email.contains('@') {
            return Err(invalid("Email address looks invalid."));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters."
            )));
        }
        if self.password != self.confirm_password {
            return Err(invalid("Passwords do not match."));
        }

        let phone = if phone.is_empty() {
            None
        } else {
            Some(super::profile::normalize_phone(phone)?)
        };

        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            phone,
        })
    }
}

/// Verification hand-off after registration. The response email wins over
/// the submitted one when the backend normalized it.
#[must_use]
pub fn handoff(request: &RegisterRequest, response: RegisterResponse) -> PendingVerification {
    let email = response
        .email
        .filter(|email| !email.trim().is_empty())
        .unwrap_or_else(|| request.email.clone());
    PendingVerification::new(response.user_id, email)
}

fn invalid(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}
