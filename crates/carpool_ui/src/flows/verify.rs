//! Email verification page state: the OTP widget, the resend countdown, and
//! the identity handed over by login or registration.

use crate::{
    error::AppError,
    otp::OtpInput,
    paths,
    resend::{ResendTimer, TimerState},
    session::{PendingVerification, SessionStore},
    types::{ResendOtpRequest, VerifyEmailRequest, VerifyEmailResponse},
};
use tracing::debug;

pub const VERIFY_FAILED: &str = "Verification failed. Please check the code and try again.";
pub const RESEND_FAILED: &str = "Could not send a new code. Please try again.";

/// Accepts the hand-off only when it names an email; otherwise returns the
/// route the page should redirect to instead of rendering.
///
/// # Errors
/// Returns the registration route when the hand-off is missing or blank.
pub fn resolve_pending(
    pending: Option<&PendingVerification>,
) -> Result<PendingVerification, &'static str> {
    match pending {
        Some(pending) if !pending.email.trim().is_empty() => Ok(pending.clone()),
        _ => {
            debug!("verification page opened without a pending verification");
            Err(paths::REGISTER)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationForm {
    pending: PendingVerification,
    otp: OtpInput,
    timer: ResendTimer,
}

impl VerificationForm {
    #[must_use]
    pub fn new(pending: PendingVerification) -> Self {
        Self::with_timer(pending, ResendTimer::new())
    }

    #[must_use]
    pub fn with_timer(pending: PendingVerification, timer: ResendTimer) -> Self {
        Self {
            pending,
            otp: OtpInput::new(),
            timer,
        }
    }

    #[must_use]
    pub fn pending(&self) -> &PendingVerification {
        &self.pending
    }

    #[must_use]
    pub fn otp(&self) -> &OtpInput {
        &self.otp
    }

    pub fn otp_mut(&mut self) -> &mut OtpInput {
        &mut self.otp
    }

    #[must_use]
    pub fn timer(&self) -> &ResendTimer {
        &self.timer
    }

    /// One second elapsed.
    pub fn tick(&mut self) -> TimerState {
        self.timer.tick()
    }

    /// Builds the verify request, or the inline error when the code is short.
    ///
    /// # Errors
    /// Returns `AppError::Validation` unless all six digits are present.
    pub fn submission(&self) -> Result<VerifyEmailRequest, AppError> {
        let otp = self.otp.submission()?;
        Ok(VerifyEmailRequest {
            user_id: self.pending.user_id.clone(),
            email: self.pending.email.clone(),
            otp,
        })
    }

    /// Builds the resend request once the countdown has finished.
    ///
    /// # Errors
    /// Returns `AppError::Validation` while the countdown is still running.
    pub fn begin_resend(&self) -> Result<ResendOtpRequest, AppError> {
        match self.timer.state() {
            TimerState::Eligible => Ok(ResendOtpRequest {
                user_id: self.pending.user_id.clone(),
                email: self.pending.email.clone(),
            }),
            TimerState::Counting { remaining } => Err(AppError::Validation(format!(
                "You can request a new code in {remaining}s."
            ))),
        }
    }

    /// A new code is on its way: restart the countdown and empty the cells.
    pub fn resend_succeeded(&mut self) {
        self.timer.restart();
        self.otp.clear();
    }

    #[must_use]
    pub fn resend_notice(&self) -> String {
        format!("A new code has been sent to {}.", self.pending.email)
    }
}

/// Stores the session when verification signed the user in and returns the
/// next route: home after auto-login, the login page otherwise.
pub fn complete_verification(store: &mut SessionStore, response: VerifyEmailResponse) -> &'static str {
    store.clear_pending_verification();
    match response.into_session() {
        Some(session) => {
            store.login(session);
            debug!("verification signed the user in");
            paths::HOME
        }
        None => paths::LOGIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    fn pending() -> PendingVerification {
        PendingVerification::new(Some("u1".to_string()), "ada@example.com")
    }

    #[test]
    fn missing_handoff_redirects_to_register() {
        assert_eq!(resolve_pending(None), Err(paths::REGISTER));
        let blank = PendingVerification::new(None, "   ");
        assert_eq!(resolve_pending(Some(&blank)), Err(paths::REGISTER));
        assert_eq!(resolve_pending(Some(&pending())), Ok(pending()));
    }

    #[test]
    fn short_code_never_builds_a_request() {
        let mut form = VerificationForm::new(pending());
        assert!(matches!(form.submission(), Err(AppError::Validation(_))));

        form.otp_mut().paste("12345");
        assert!(matches!(form.submission(), Err(AppError::Validation(_))));

        form.otp_mut().input(5, "6");
        assert_eq!(
            form.submission(),
            Ok(VerifyEmailRequest {
                user_id: Some("u1".to_string()),
                email: "ada@example.com".to_string(),
                otp: "123456".to_string(),
            })
        );
    }

    #[test]
    fn resend_is_locked_until_countdown_ends() {
        let mut form = VerificationForm::with_timer(pending(), ResendTimer::with_duration(2));
        assert_eq!(
            form.begin_resend(),
            Err(AppError::Validation(
                "You can request a new code in 2s.".to_string()
            ))
        );

        form.tick();
        assert!(form.begin_resend().is_err());

        form.tick();
        assert_eq!(
            form.begin_resend(),
            Ok(ResendOtpRequest {
                user_id: Some("u1".to_string()),
                email: "ada@example.com".to_string(),
            })
        );
    }

    #[test]
    fn successful_resend_restarts_timer_and_clears_cells() {
        let mut form = VerificationForm::with_timer(pending(), ResendTimer::with_duration(1));
        form.otp_mut().paste("123");
        form.tick();

        form.resend_succeeded();
        assert_eq!(form.timer().remaining(), 1);
        assert_eq!(form.otp().code(), "");
        assert_eq!(form.otp().focus(), 0);
        assert_eq!(form.resend_notice(), "A new code has been sent to ada@example.com.");
    }

    #[test]
    fn verification_with_session_logs_in_and_goes_home() {
        let mut store = SessionStore::new();
        store.set_pending_verification(pending());
        let response = VerifyEmailResponse {
            token: Some("t".to_string()),
            user: Some(User {
                id: "u1".to_string(),
                email: "ada@example.com".to_string(),
                ..User::default()
            }),
            message: None,
        };

        assert_eq!(complete_verification(&mut store, response), paths::HOME);
        assert!(store.is_authenticated());
        assert_eq!(store.pending_verification(), None);
    }

    #[test]
    fn verification_without_session_goes_to_login() {
        let mut store = SessionStore::new();
        store.set_pending_verification(pending());
        let response = VerifyEmailResponse {
            message: Some("Email verified".to_string()),
            ..VerifyEmailResponse::default()
        };

        assert_eq!(complete_verification(&mut store, response), paths::LOGIN);
        assert!(!store.is_authenticated());
        assert_eq!(store.pending_verification(), None);
    }
}
